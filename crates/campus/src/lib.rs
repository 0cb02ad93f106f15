//! Facade crate for the campus portal features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Add `campus` with the `server` feature for the HTTP bindings.
//! - Call `campus::init` to build the feature slices from an [`ApiConfig`].

pub use campus_domain as domain;
use campus_domain::config::ApiConfig;
pub use campus_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use campus_kernel::server::router::system_router;
        pub use campus_notices::server::router as notices_router;
    }

    pub use campus_access::server::{Gate, require_roles};
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use campus_access as access;
    pub use campus_notices as notices;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "access",
        "notices",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![features::access::init(&config.access)?, features::notices::init(&config.notices)?];
    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_initializes_all_slices() {
        let slices = init(&ApiConfig::default()).unwrap();
        let names: Vec<_> = slices.iter().map(|s| s.name).collect();
        assert_eq!(names, ["access", "notices"]);
        assert!(features::is_enabled("notices"));
        assert!(!features::is_enabled("licensing"));
    }
}
