use campus_domain::config::{AccessConfig, ApiConfig, LoggingConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let access = AccessConfig::default();
    assert_eq!(access.session_header, "x-session-id");
    assert_eq!(access.sign_in_path, "/signin");
    assert_eq!(access.home_path, "/");
    assert_eq!(access.homes.student, "/student");
    assert_eq!(access.homes.alumni, "/alumni");

    let logging = LoggingConfig::default();
    assert!(logging.console);
    assert!(logging.directory.is_none());
}

#[test]
fn api_config_deserializes_partial_sections() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "access": { "sign_in_path": "/login", "homes": { "faculty": "/staff" } },
        "notices": { "source": "/srv/notices.json" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.access.sign_in_path, "/login");
    assert_eq!(cfg.access.homes.faculty, "/staff");
    // untouched keys keep their defaults
    assert_eq!(cfg.access.homes.admin, "/admin");
    assert_eq!(cfg.notices.source, Some(std::path::PathBuf::from("/srv/notices.json")));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn api_config_clone_on_write() {
    let original = ApiConfig::default();
    let mut copy = original.clone();
    copy.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(copy.server.port, 9000);
}
