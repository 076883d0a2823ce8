use dioxus::prelude::*;

use super::{AdminDashboard, ClientDashboard, ContractorDashboard};
use crate::{
    Route,
    session::{DashboardView, GuardOutcome, use_session_guard},
};

#[component]
pub fn Dashboard() -> Element {
    let nav = navigator();

    match use_session_guard() {
        GuardOutcome::Active(payload) => {
            tracing::debug!("Rendering dashboard for {} ({})", payload.sub, payload.role.as_str());

            match DashboardView::for_claim(&payload.role) {
                DashboardView::Admin => rsx! { AdminDashboard {} },
                DashboardView::Client => rsx! { ClientDashboard {} },
                DashboardView::Contractor => rsx! { ContractorDashboard {} },
                DashboardView::UnknownRole => rsx! {
                    div { class: "centered-page",
                        div { class: "fallback-error", "Unknown user role" }
                    }
                },
            }
        }
        GuardOutcome::Redirect(_) => {
            nav.push(Route::Login {});
            rsx! {
                div { class: "centered-page",
                    div { class: "loading", "Redirecting to login..." }
                }
            }
        }
    }
}
