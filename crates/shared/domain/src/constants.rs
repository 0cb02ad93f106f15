//! Shared string constants: role names, `OpenAPI` tags and well-known routes.

pub const STUDENT: &str = "student";
pub const FACULTY: &str = "faculty";
pub const ADMIN: &str = "admin";
pub const ALUMNI: &str = "alumni";

pub const SYSTEM_TAG: &str = "System";
pub const NOTICES_TAG: &str = "Notices";
pub const DASHBOARD_TAG: &str = "Dashboard";

/// Header carrying the opaque session id issued by the auth service.
pub const SESSION_HEADER: &str = "x-session-id";

pub const SIGN_IN_PATH: &str = "/signin";
pub const HOME_PATH: &str = "/";
