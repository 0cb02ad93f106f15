//! Notice feature slice.
//!
//! * [`lifecycle`]: pure active/archived classification by expiry date.
//! * [`source`]: where notice records come from.
//! * [`query`]: listing filters layered on top of the classification.
//! * `server` (feature): `/api/notices` endpoints.

mod error;
pub mod lifecycle;
pub mod query;
#[cfg(feature = "server")]
pub mod server;
pub mod source;

pub use crate::error::{NoticeError, NoticeErrorExt};
pub use crate::lifecycle::{
    active_only, archived_only, classify, is_expired, parse_expiry, partition,
};
pub use crate::query::{NoticeQuery, NoticeStatus};
pub use crate::source::{NoticeSource, StaticNotices};

use campus_domain::config::NoticesConfig;
use campus_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Notice feature state
#[derive(Debug)]
pub struct NoticesInner {
    pub source: Arc<dyn NoticeSource>,
}

#[derive(Debug, Clone)]
pub struct Notices {
    inner: Arc<NoticesInner>,
}

impl Notices {
    #[must_use]
    pub fn new(source: impl NoticeSource + 'static) -> Self {
        Self { inner: Arc::new(NoticesInner { source: Arc::new(source) }) }
    }
}

impl Deref for Notices {
    type Target = NoticesInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Notices {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the notices feature from the `[notices]` config section.
///
/// # Errors
/// Returns an error if the configured source file cannot be read or decoded.
pub fn init(cfg: &NoticesConfig) -> Result<InitializedSlice, NoticeError> {
    let source = match &cfg.source {
        Some(path) => StaticNotices::load(path)?,
        None => {
            tracing::warn!("No notice source configured, serving an empty list");
            StaticNotices::default()
        },
    };
    tracing::info!(count = source.len(), "Notices slice initialized");
    Ok(InitializedSlice::new("notices", Notices::new(source)))
}

/// Wraps a ready-made source, bypassing config.
pub fn init_with(source: impl NoticeSource + 'static) -> InitializedSlice {
    InitializedSlice::new("notices", Notices::new(source))
}
