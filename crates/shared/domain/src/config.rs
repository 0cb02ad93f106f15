use crate::constants::{HOME_PATH, SESSION_HEADER, SIGN_IN_PATH};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub access: AccessConfig,
    pub notices: NoticesConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Access guard destinations and session lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Request header that carries the session id.
    pub session_header: String,
    pub sign_in_path: String,
    /// Fallback for roles without a dedicated home.
    pub home_path: String,
    pub homes: RoleHomes,
}

/// Per-role landing pages used when a signed-in user hits a route they may not see.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoleHomes {
    pub student: String,
    pub faculty: String,
    pub admin: String,
    pub alumni: String,
}

/// Where the notice list comes from.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NoticesConfig {
    /// JSON array of notices. Without it the service starts with an empty list.
    pub source: Option<PathBuf>,
}

/// Logging sink configuration consumed by the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default directive, overridden by `RUST_LOG`.
    pub level: String,
    pub console: bool,
    /// Rolling file output directory. Disabled when absent.
    pub directory: Option<PathBuf>,
    pub max_files: usize,
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            session_header: SESSION_HEADER.to_owned(),
            sign_in_path: SIGN_IN_PATH.to_owned(),
            home_path: HOME_PATH.to_owned(),
            homes: RoleHomes::default(),
        }
    }
}

impl Default for RoleHomes {
    fn default() -> Self {
        Self {
            student: "/student".to_owned(),
            faculty: "/faculty".to_owned(),
            admin: "/admin".to_owned(),
            alumni: "/alumni".to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, max_files: 10, json: false }
    }
}
