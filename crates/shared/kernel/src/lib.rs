//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading, the session store the
//! access guard observes, and (with `server`) the shared Axum state plus system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use campus_kernel::config::load_config;
//! use campus_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! ```
pub mod config;
pub mod error;
pub mod prelude;
pub mod security;
#[cfg(feature = "server")]
pub mod server;

pub use campus_domain as domain;
