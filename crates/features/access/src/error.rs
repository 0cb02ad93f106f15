use campus_kernel::error::format_context;
use std::borrow::Cow;

/// Errors raised while wiring the access slice. The guard itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("Access config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
