use api::LoginRequest;
use dioxus::{core::spawn_forever, prelude::*};

use super::components::{BackHome, FormAlert};
use crate::{
    AppContext, Route,
    auth_form::{FormMessage, FormSignals, REDIRECT_DELAY, finish, pause, submit_login},
};

#[component]
pub fn Login() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let message = use_signal(|| None::<FormMessage>);
    let loading = use_signal(|| false);
    let mut form = FormSignals { loading, message };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        form.start();

        let request = LoginRequest {
            email: email(),
            password: password().into(),
        };
        let ctx = ctx.clone();
        // On the root scope, so leaving the page does not drop the request.
        spawn_forever(async move {
            let mut form = form;
            let submission = submit_login(&ctx.auth, &*ctx.tokens, request);
            if finish(submission, &mut form).await {
                pause(REDIRECT_DELAY).await;
                nav.push(Route::Dashboard {});
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            BackHome {}
            div { class: "auth-card",
                h2 { class: "auth-title", "Welcome Back" }

                form { class: "auth-form", onsubmit: handle_login,
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
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-lg btn-block",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Log In" }
                    }
                }

                FormAlert { message }

                p { class: "auth-switch",
                    "New to SkillSync? "
                    Link { to: Route::Register { role: None }, "Create Account" }
                }
            }
        }
    }
}
