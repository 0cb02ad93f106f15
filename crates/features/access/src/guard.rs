//! Render-or-redirect decision for a protected subtree.
//!
//! ```text
//!                 ┌── no user ─────────────▶ UNAUTHENTICATED  (navigate: sign-in)
//!  LOADING ──────┼── role ∉ allowed ──────▶ FORBIDDEN        (navigate: role home)
//!  (resolving)    └── role ∈ allowed ──────▶ AUTHORIZED       (render children)
//! ```
//!
//! [`decide`] is the pure core. [`AccessGuard`] wraps it with the navigation side
//! effect, fired when a redirecting state is entered, and re-runs it whenever the
//! observed session changes.

use crate::redirect::RedirectPolicy;
use campus_domain::role::RoleSet;
use campus_domain::session::Session;
use std::fmt;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Guard states. Only [`GuardState::Authorized`] renders children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuardState {
    #[default]
    Loading,
    Unauthenticated,
    Forbidden,
    Authorized,
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Loading => "loading",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::Authorized => "authorized",
        })
    }
}

/// Outcome of one evaluation. Redirecting outcomes borrow their path from the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    /// Session still resolving: render nothing, navigate nowhere.
    Wait,
    /// Nobody signed in: go to the sign-in page.
    SignIn(&'a str),
    /// Signed in with a role outside the allowed set: go to that role's landing page.
    Redirect(&'a str),
    /// Role admitted: render the protected subtree.
    Render,
}

impl GuardDecision<'_> {
    #[must_use]
    pub const fn state(&self) -> GuardState {
        match self {
            Self::Wait => GuardState::Loading,
            Self::SignIn(_) => GuardState::Unauthenticated,
            Self::Redirect(_) => GuardState::Forbidden,
            Self::Render => GuardState::Authorized,
        }
    }

    #[must_use]
    pub const fn destination(&self) -> Option<&str> {
        match self {
            Self::SignIn(to) | Self::Redirect(to) => Some(*to),
            Self::Wait | Self::Render => None,
        }
    }

    #[must_use]
    pub const fn renders_children(&self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decides what a protected subtree does for `session`.
///
/// Roles are already normalized at the session boundary, so membership is a
/// plain set test. An empty `allowed` set admits nobody.
#[must_use]
pub fn decide<'a>(session: &Session, allowed: RoleSet, policy: &'a RedirectPolicy) -> GuardDecision<'a> {
    if session.loading {
        return GuardDecision::Wait;
    }
    let Some(user) = &session.current_user else {
        return GuardDecision::SignIn(policy.sign_in());
    };
    if allowed.admits(user.role) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(policy.destination_for(user.role))
    }
}

/// The router capability the guard drives.
pub trait Navigator {
    fn navigate(&self, destination: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, destination: &str) {
        self(destination);
    }
}

/// A mounted guard for one protected subtree.
///
/// The allowed set is fixed at construction; remounting with a different set means
/// building a new guard, which starts over in `LOADING`.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    allowed: RoleSet,
    policy: RedirectPolicy,
    state: GuardState,
    last_destination: Option<String>,
}

impl AccessGuard {
    #[must_use]
    pub fn new(allowed: RoleSet, policy: RedirectPolicy) -> Self {
        Self { allowed, policy, state: GuardState::Loading, last_destination: None }
    }

    #[must_use]
    pub const fn state(&self) -> GuardState {
        self.state
    }

    #[must_use]
    pub const fn allowed(&self) -> RoleSet {
        self.allowed
    }

    #[must_use]
    pub fn renders_children(&self) -> bool {
        self.state == GuardState::Authorized
    }

    /// Re-runs the decision for `session`.
    ///
    /// Navigation fires only when the outcome changes, so evaluating the same
    /// input twice redirects once.
    pub fn evaluate<N>(&mut self, session: &Session, navigator: &N) -> GuardState
    where
        N: Navigator + ?Sized,
    {
        let decision = decide(session, self.allowed, &self.policy);
        let state = decision.state();
        let destination = decision.destination();

        if state == self.state && destination == self.last_destination.as_deref() {
            trace!(%state, "Guard outcome unchanged");
            return state;
        }

        debug!(from = %self.state, to = %state, destination, "Guard transition");
        if let Some(to) = destination {
            navigator.navigate(to);
        }
        self.last_destination = destination.map(ToOwned::to_owned);
        self.state = state;
        state
    }

    /// Follows a session until its sender is dropped, re-evaluating on every change.
    ///
    /// Returns the last state reached.
    pub async fn watch<N>(mut self, mut session: watch::Receiver<Session>, navigator: &N) -> GuardState
    where
        N: Navigator + Sync + ?Sized,
    {
        loop {
            let current = session.borrow_and_update().clone();
            self.evaluate(&current, navigator);
            if session.changed().await.is_err() {
                debug!(state = %self.state, "Session closed, guard detached");
                return self.state;
            }
        }
    }
}
