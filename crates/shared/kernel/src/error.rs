//! Shared helpers for the crate-local error enums.
//!
//! Every error variant in the workspace carries an optional human-readable
//! `context`, rendered after the variant label as ` (context)`.

use std::borrow::Cow;

/// Renders an optional context suffix for `#[error(...)]` format strings.
#[must_use]
#[allow(clippy::ref_option)]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
