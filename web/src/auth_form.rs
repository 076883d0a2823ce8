use std::time::Duration;

use api::{AuthApi, AuthOutcome, LoginRequest, RegisterRequest};
use dioxus::prelude::*;
use secrecy::ExposeSecret;

use crate::storage::TokenStore;

/// How long the success message stays up before moving on to the dashboard.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const NETWORK_ERROR: &str = "Network error — is the backend running?";
const LOGIN_FALLBACK: &str = "Invalid credentials";
const REGISTER_FALLBACK: &str = "Registration failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub tone: Tone,
    pub text: String,
}

impl FormMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.tone {
            Tone::Success => "form-message form-message-success",
            Tone::Error => "form-message form-message-error",
        }
    }
}

/// Result of submitting one of the auth forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: FormMessage,
    /// Go to the dashboard after [`REDIRECT_DELAY`].
    pub redirect: bool,
}

impl Submission {
    fn settle<S>(outcome: AuthOutcome, store: &S, success: String, fallback: &str) -> Self
    where
        S: TokenStore + ?Sized,
    {
        match outcome {
            AuthOutcome::Authenticated(token) => {
                store.save(token.expose_secret());
                Self {
                    message: FormMessage::success(success),
                    redirect: true,
                }
            }
            AuthOutcome::Rejected { detail } => Self {
                message: FormMessage::error(detail.unwrap_or_else(|| fallback.to_string())),
                redirect: false,
            },
            AuthOutcome::Network => Self {
                message: FormMessage::error(NETWORK_ERROR),
                redirect: false,
            },
        }
    }
}

pub async fn submit_login<A, S>(api: &A, store: &S, request: LoginRequest) -> Submission
where
    A: AuthApi,
    S: TokenStore + ?Sized,
{
    let outcome = api.login(&request).await;
    if matches!(outcome, AuthOutcome::Authenticated(_)) {
        tracing::info!("Logged in");
    }

    Submission::settle(outcome, store, "Welcome back!".to_string(), LOGIN_FALLBACK)
}

pub async fn submit_register<A, S>(api: &A, store: &S, request: RegisterRequest) -> Submission
where
    A: AuthApi,
    S: TokenStore + ?Sized,
{
    let outcome = api.register(&request).await;
    if matches!(outcome, AuthOutcome::Authenticated(_)) {
        tracing::info!("Registered new {} account", request.role);
    }

    let success = format!("Success! Welcome, {}. Redirecting...", request.name);
    Submission::settle(outcome, store, success, REGISTER_FALLBACK)
}

/// Where a form shows how its submission went.
pub trait FormStatus {
    /// Returns `false` once the form is no longer mounted.
    fn show(&mut self, message: FormMessage) -> bool;
}

/// Loading flag and message slot of a mounted auth form.
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub loading: Signal<bool>,
    pub message: Signal<Option<FormMessage>>,
}

impl FormSignals {
    pub fn start(&mut self) {
        self.loading.set(true);
        self.message.set(None);
    }
}

impl FormStatus for FormSignals {
    fn show(&mut self, message: FormMessage) -> bool {
        let (Ok(mut loading), Ok(mut slot)) = (self.loading.try_write(), self.message.try_write())
        else {
            return false;
        };
        *loading = false;
        *slot = Some(message);
        true
    }
}

/// Waits for `submission` and reports it to the form if it is still around.
/// The token is persisted by the submission itself, so leaving the page while
/// a request is in flight does not lose it. Returns whether to redirect.
pub async fn finish<F, S>(submission: F, status: &mut S) -> bool
where
    F: Future<Output = Submission>,
    S: FormStatus,
{
    let submission = submission.await;
    if !status.show(submission.message) {
        tracing::debug!("Auth form closed before its request finished");
    }
    submission.redirect
}

/// Sleep on the browser's timer.
pub async fn pause(duration: Duration) {
    let js = format!(
        "await new Promise(resolve => setTimeout(resolve, {})); dioxus.send(null);",
        duration.as_millis()
    );
    if let Err(e) = document::eval(&js).recv::<()>().await {
        tracing::warn!("Redirect timer did not fire: {e:?}");
    }
}
