use dioxus::prelude::*;
use jiff::Timestamp;
use types::{Role, RoleClaim, TokenPayload, decode_token};

use crate::{
    AppContext,
    storage::TokenStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    MissingSession,
    MalformedToken,
    Expired,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Active(TokenPayload),
    Redirect(RedirectReason),
}

/// One-shot validation of the stored token. A token that cannot be used is
/// removed from the store before redirecting.
pub fn check_session<S>(store: &S, now: Timestamp) -> GuardOutcome
where
    S: TokenStore + ?Sized,
{
    let Some(token) = store.load() else {
        tracing::debug!("No session token, redirecting to login");
        return GuardOutcome::Redirect(RedirectReason::MissingSession);
    };

    let payload = match decode_token(&token) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!("Discarding malformed session token: {}", e);
            store.clear();
            return GuardOutcome::Redirect(RedirectReason::MalformedToken);
        }
    };

    if payload.is_expired_at(now) {
        tracing::debug!("Session for {} expired at {}", payload.sub, payload.exp);
        store.clear();
        return GuardOutcome::Redirect(RedirectReason::Expired);
    }

    GuardOutcome::Active(payload)
}

/// Runs [`check_session`] once per mount of the calling component.
pub fn use_session_guard() -> GuardOutcome {
    let tokens = use_context::<AppContext>().tokens;
    use_hook(move || check_session(&*tokens, Timestamp::now()))
}

pub fn logout<S>(store: &S)
where
    S: TokenStore + ?Sized,
{
    store.clear();
    tracing::info!("Signed out");
}

/// Which dashboard a session gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Client,
    Contractor,
    UnknownRole,
}

impl DashboardView {
    pub fn for_claim(claim: &RoleClaim) -> Self {
        match claim {
            RoleClaim::Known(role) => Self::from(*role),
            RoleClaim::Unknown(_) => DashboardView::UnknownRole,
        }
    }
}

impl From<Role> for DashboardView {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => DashboardView::Admin,
            Role::Client => DashboardView::Client,
            Role::Contractor => DashboardView::Contractor,
        }
    }
}
