use campus_kernel::error::format_context;
use std::borrow::Cow;

/// A specialized [`NoticeError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    /// An expiry date was present but matched none of the accepted formats.
    #[error("Malformed expiry date{}: {value}", format_context(.context))]
    MalformedExpiryDate { value: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Notice source I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Notice source decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Notice not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal notice error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to results that can turn into [`NoticeError`].
pub trait NoticeErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, NoticeError>;
}

impl<T> NoticeErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, NoticeError> {
        self.map_err(|source| NoticeError::Io { source, context: Some(context.into()) })
    }
}

impl<T> NoticeErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, NoticeError> {
        self.map_err(|source| NoticeError::Decode { source, context: Some(context.into()) })
    }
}

impl From<String> for NoticeError {
    fn from(message: String) -> Self {
        Self::Internal { message: message.into(), context: None }
    }
}
