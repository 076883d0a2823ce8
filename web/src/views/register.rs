use api::RegisterRequest;
use dioxus::{core::spawn_forever, prelude::*};
use types::Role;

use super::components::{BackHome, FormAlert};
use crate::{
    AppContext, Route,
    auth_form::{FormMessage, FormSignals, REDIRECT_DELAY, finish, pause, submit_register},
};

/// Sign-up form. `?role=contractor` preselects the contractor account type.
#[component]
pub fn Register(role: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let nav = navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut selected_role = use_signal(|| Role::from_signup_query(role.as_deref()));
    let message = use_signal(|| None::<FormMessage>);
    let loading = use_signal(|| false);
    let mut form = FormSignals { loading, message };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        form.start();

        let request = RegisterRequest {
            name: name(),
            email: email(),
            password: password().into(),
            role: selected_role(),
        };
        let ctx = ctx.clone();
        // On the root scope, so leaving the page does not drop the request.
        spawn_forever(async move {
            let mut form = form;
            let submission = submit_register(&ctx.auth, &*ctx.tokens, request);
            if finish(submission, &mut form).await {
                pause(REDIRECT_DELAY).await;
                nav.push(Route::Dashboard {});
            }
        });
    };

    let toggle_class = move |option: Role| {
        if selected_role() != option {
            "role-toggle"
        } else if option == Role::Contractor {
            "role-toggle role-toggle-active-green"
        } else {
            "role-toggle role-toggle-active-blue"
        }
    };

    rsx! {
        div { class: "auth-page",
            BackHome {}
            div { class: "auth-card auth-card-wide",
                h2 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Join SkillSync — fast, secure, professional" }

                form { class: "auth-form", onsubmit: handle_register,
                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Full Name",
                        required: true,
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }

                    div { class: "role-toggles",
                        button {
                            r#type: "button",
                            class: toggle_class(Role::Client),
                            onclick: move |_| selected_role.set(Role::Client),
                            "Client"
                        }
                        button {
                            r#type: "button",
                            class: toggle_class(Role::Contractor),
                            onclick: move |_| selected_role.set(Role::Contractor),
                            "Contractor"
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-lg btn-block",
                        disabled: loading(),
                        if loading() { "Creating Account..." } else { "Sign Up" }
                    }
                }

                FormAlert { message }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log In" }
                }
            }
        }
    }
}
