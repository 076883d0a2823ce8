use api::{Config, HttpAuthApi};
use dioxus::prelude::*;

mod auth_form;
mod client_state;
mod mock;
mod session;
mod storage;
mod views;

use storage::SharedStore;
use views::{Dashboard, Home, Login, NotFound, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register?:role")]
        Register { role: Option<String> },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Services shared by every page: the auth backend and where the token lives.
#[derive(Clone)]
pub struct AppContext {
    pub auth: HttpAuthApi,
    pub tokens: SharedStore,
}

impl AppContext {
    fn from_env() -> Self {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::error!("Falling back to the default API URL: {e}");
            Config::default()
        });
        tracing::info!("Using auth backend at {}", config.api_url());

        Self {
            auth: HttpAuthApi::new(config),
            tokens: storage::platform_store(),
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppContext::from_env);

    rsx! {
        document::Title { "SkillSync" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand", "SkillSync" }
            nav { class: "site-nav",
                Link { to: Route::Login {}, class: "site-nav-link", "Log In" }
                Link {
                    to: Route::Register { role: None },
                    class: "btn btn-primary site-nav-cta",
                    "Sign Up"
                }
            }
        }
        Outlet::<Route> {}
    }
}
