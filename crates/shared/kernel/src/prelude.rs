pub use crate::config::load_config;
pub use crate::security::session::{SessionError, SessionStore};
#[cfg(feature = "server")]
pub use crate::server::ApiState;
pub use campus_domain::config::ApiConfig;
pub use campus_domain::role::{Role, RoleSet};
pub use campus_domain::session::{CurrentUser, Session};
