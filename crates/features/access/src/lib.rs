//! Access feature slice: role gating for dashboard routes.
//!
//! * [`guard`] holds the state machine and the [`Navigator`] seam.
//! * [`redirect`] maps roles to landing pages.
//! * `server` (feature) binds the guard to Axum routes as middleware.

mod error;
pub mod guard;
pub mod redirect;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::AccessError;
pub use crate::guard::{AccessGuard, GuardDecision, GuardState, Navigator, decide};
pub use crate::redirect::RedirectPolicy;

use campus_domain::config::AccessConfig;
use campus_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Access feature state
#[derive(Debug)]
pub struct AccessInner {
    pub policy: RedirectPolicy,
    /// Lowercased header name carrying the session id.
    pub session_header: String,
}

#[derive(Debug, Clone)]
pub struct Access {
    inner: Arc<AccessInner>,
}

impl Access {
    #[must_use]
    pub fn new(inner: AccessInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Builds the slice state from the `[access]` config section.
    pub fn from_config(cfg: &AccessConfig) -> Result<Self, AccessError> {
        let header = cfg.session_header.trim().to_ascii_lowercase();
        if header.is_empty() || !header.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(AccessError::Config {
                message: format!("invalid session header '{}'", cfg.session_header).into(),
                context: Some("access.session_header".into()),
            });
        }
        let homes = &cfg.homes;
        for (key, path) in [
            ("sign_in_path", &cfg.sign_in_path),
            ("home_path", &cfg.home_path),
            ("homes.student", &homes.student),
            ("homes.faculty", &homes.faculty),
            ("homes.admin", &homes.admin),
            ("homes.alumni", &homes.alumni),
        ] {
            validate_target(key, path)?;
        }
        Ok(Self::new(AccessInner { policy: RedirectPolicy::from(cfg), session_header: header }))
    }
}

/// Redirect targets end up in a `Location` header: they must be same-origin
/// absolute paths made of visible ASCII.
fn validate_target(key: &'static str, path: &str) -> Result<(), AccessError> {
    let problem = if !path.starts_with('/') || path.starts_with("//") {
        Some("must be an absolute path on this site")
    } else if !path.bytes().all(|b| b.is_ascii_graphic()) {
        Some("contains whitespace, control or non-ASCII characters")
    } else {
        None
    };
    problem.map_or(Ok(()), |why| {
        Err(AccessError::Config {
            message: format!("redirect target {path:?} {why}").into(),
            context: Some(format!("access.{key}").into()),
        })
    })
}

impl Deref for Access {
    type Target = AccessInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Access {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the access feature.
///
/// # Errors
/// Returns [`AccessError::Config`] when the session header or redirect paths are unusable.
pub fn init(cfg: &AccessConfig) -> Result<InitializedSlice, AccessError> {
    let access = Access::from_config(cfg)?;
    tracing::info!(header = %access.session_header, "Access slice initialized");
    Ok(InitializedSlice::new("access", access))
}
