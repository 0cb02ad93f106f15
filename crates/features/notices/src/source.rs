use crate::error::{NoticeError, NoticeErrorExt};
use crate::lifecycle::parse_expiry;
use campus_domain::notice::Notice;
use fxhash::FxHashSet;
use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// An ordered supply of notice records owned by someone else.
pub trait NoticeSource: Debug + Send + Sync {
    fn notices(&self) -> Vec<Notice>;
}

/// Fixed list held in memory, optionally read once from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticNotices {
    notices: Arc<[Notice]>,
}

impl StaticNotices {
    #[must_use]
    pub fn new(notices: Vec<Notice>) -> Self {
        audit(&notices);
        Self { notices: notices.into() }
    }

    /// Parses a JSON array of notice records.
    pub fn from_json(json: &str) -> Result<Self, NoticeError> {
        let notices: Vec<Notice> = serde_json::from_str(json).context("Parsing notice list")?;
        Ok(Self::new(notices))
    }

    /// Reads a JSON array of notice records from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NoticeError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).context(format!("Reading {}", path.display()))?;
        let source = Self::from_json(&raw)?;
        info!(path = %path.display(), count = source.notices.len(), "Notices loaded");
        Ok(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl NoticeSource for StaticNotices {
    fn notices(&self) -> Vec<Notice> {
        self.notices.to_vec()
    }
}

/// Reports data problems up front; records are kept as-is.
fn audit(notices: &[Notice]) {
    let mut seen = FxHashSet::default();
    for notice in notices {
        if !seen.insert(notice.id.as_str()) {
            warn!(id = %notice.id, "Duplicate notice id");
        }
        if let Err(e) = parse_expiry(notice.expiry_date.as_deref()) {
            warn!(id = %notice.id, error = %e, "Notice will never be archived");
        }
    }
}
