//! Explicit session lifecycle.
//!
//! The auth service owns sign-in; this store only mirrors what it reports so
//! the guard can read a [`Session`] per request and long-lived observers can
//! react to changes. Each session id owns one `watch` channel:
//!
//! ```text
//! open(id)            -> Session::pending()      (loading)
//! resolve(id, user)   -> Session::signed_in(..)  (or anonymous when user is None)
//! sign_out(id)        -> Session::anonymous()
//! close(id)           -> channel dropped, receivers observe closure
//! ```

use crate::error::format_context;
use campus_domain::session::{CurrentUser, Session};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The id was never opened or has already been closed.
    #[error("Session not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Shared, cheaply clonable registry of live sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<FxHashMap<String, watch::Sender<Session>>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` in the loading state. Re-opening an existing id
    /// resets it to loading and keeps existing subscribers attached.
    pub fn open(&self, id: impl Into<String>) -> watch::Receiver<Session> {
        let id = id.into();
        let mut sessions = self.sessions.write();
        if let Some(tx) = sessions.get(&id) {
            tx.send_replace(Session::pending());
            return tx.subscribe();
        }
        debug!(session = %id, "Session opened");
        let (tx, rx) = watch::channel(Session::pending());
        sessions.insert(id, tx);
        rx
    }

    /// Finishes resolution. `None` means the auth service found nobody signed in.
    pub fn resolve(&self, id: &str, user: Option<CurrentUser>) -> Result<(), SessionError> {
        let next = user.map_or_else(Session::anonymous, Session::signed_in);
        trace!(session = %id, role = ?next.role(), "Session resolved");
        self.publish(id, next)
    }

    /// Clears the user but keeps the session observable.
    pub fn sign_out(&self, id: &str) -> Result<(), SessionError> {
        debug!(session = %id, "Session signed out");
        self.publish(id, Session::anonymous())
    }

    /// Tears the session down. Returns whether it existed.
    pub fn close(&self, id: &str) -> bool {
        let removed = self.sessions.write().remove(id).is_some();
        if removed {
            debug!(session = %id, "Session closed");
        }
        removed
    }

    /// Snapshot of a session. Unknown ids read as resolved and anonymous.
    #[must_use]
    pub fn get(&self, id: &str) -> Session {
        self.sessions.read().get(id).map_or_else(Session::anonymous, |tx| tx.borrow().clone())
    }

    /// Subscribes to changes of an open session.
    pub fn subscribe(&self, id: &str) -> Result<watch::Receiver<Session>, SessionError> {
        self.sessions.read().get(id).map(watch::Sender::subscribe).ok_or_else(|| not_found(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    fn publish(&self, id: &str, next: Session) -> Result<(), SessionError> {
        let sessions = self.sessions.read();
        let tx = sessions.get(id).ok_or_else(|| not_found(id))?;
        // send_if_modified keeps observers quiet when nothing changed
        tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        Ok(())
    }
}

fn not_found(id: &str) -> SessionError {
    SessionError::NotFound { message: id.to_owned().into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::role::Role;

    #[test]
    fn lifecycle_transitions() {
        let store = SessionStore::new();
        let rx = store.open("s1");
        assert!(rx.borrow().loading);

        store.resolve("s1", Some(CurrentUser::new("u1", "Admin"))).unwrap();
        assert_eq!(store.get("s1").role(), Some(Role::Admin));

        store.sign_out("s1").unwrap();
        assert_eq!(store.get("s1"), Session::anonymous());

        assert!(store.close("s1"));
        assert!(!store.close("s1"));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_ids() {
        let store = SessionStore::new();
        assert_eq!(store.get("ghost"), Session::anonymous());
        assert!(matches!(store.resolve("ghost", None), Err(SessionError::NotFound { .. })));
        assert!(store.subscribe("ghost").is_err());
    }
}
