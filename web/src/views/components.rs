use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::ld_icons::{LdArrowRight, LdLogOut}};

use crate::{AppContext, Route, auth_form::FormMessage, session};

/// Title bar shared by the role dashboards, with the sign-out button.
#[component]
pub fn DashboardHeader(title: String, badge: String, badge_class: String) -> Element {
    let ctx = use_context::<AppContext>();
    let nav = navigator();

    rsx! {
        header { class: "dashboard-header",
            div { class: "dashboard-header-inner",
                div { class: "dashboard-header-title",
                    h1 { class: "page-title", "{title}" }
                    span { class: "role-badge {badge_class}", "{badge}" }
                }
                button {
                    class: "logout-btn",
                    onclick: move |_| {
                        session::logout(&*ctx.tokens);
                        nav.push(Route::Home {});
                    },
                    Icon { width: 20, height: 20, icon: LdLogOut }
                    "Logout"
                }
            }
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String, #[props(default)] icon: Option<Element>) -> Element {
    rsx! {
        div { class: "stat-card",
            div {
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
            {icon}
        }
    }
}

/// Card with an icon, blurb and a call-to-action button. `accent` selects the
/// colour scheme (`blue`, `green`, `purple`).
#[component]
pub fn ActionCard(
    icon: Element,
    title: String,
    description: String,
    action: String,
    accent: String,
) -> Element {
    rsx! {
        div { class: "action-card",
            div { class: "action-card-icon accent-{accent}", {icon} }
            h3 { class: "action-card-title", "{title}" }
            p { class: "action-card-desc", "{description}" }
            button { class: "btn btn-block btn-{accent}",
                "{action}"
                Icon { width: 20, height: 20, icon: LdArrowRight }
            }
        }
    }
}

#[component]
pub fn FormAlert(message: ReadSignal<Option<FormMessage>>) -> Element {
    match message() {
        Some(message) => rsx! {
            p { class: message.css_class(), "{message.text}" }
        },
        None => rsx! {},
    }
}

/// Translucent pill linking back to the landing page from the auth pages.
#[component]
pub fn BackHome() -> Element {
    rsx! {
        Link { to: Route::Home {}, class: "back-home", "← Back to Home" }
    }
}
