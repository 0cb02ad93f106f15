#![cfg(feature = "server")]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use campus_access::Access;
use campus_access::server::Gate;
use campus_domain::config::AccessConfig;
use campus_domain::role::{Role, RoleSet};
use campus_domain::session::CurrentUser;
use campus_kernel::security::session::SessionStore;
use tower::ServiceExt;

fn app(sessions: &SessionStore, allowed: RoleSet) -> Router {
    let access = Access::from_config(&AccessConfig::default()).expect("default config is valid");
    let router = Router::new().route("/dashboard", get(|| async { "dashboard" }));
    Gate::new(allowed, access, sessions.clone()).protect(router)
}

fn request(session: Option<&str>) -> Request<Body> {
    let mut builder = Request::get("/dashboard");
    if let Some(id) = session {
        builder = builder.header("x-session-id", id);
    }
    builder.body(Body::empty()).expect("request")
}

#[tokio::test]
async fn missing_session_redirects_to_sign_in() {
    let sessions = SessionStore::new();
    let response = app(&sessions, RoleSet::STUDENT).oneshot(request(None)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/signin");
}

#[tokio::test]
async fn pending_session_is_unavailable() {
    let sessions = SessionStore::new();
    let _rx = sessions.open("pending");
    let response =
        app(&sessions, RoleSet::STUDENT).oneshot(request(Some("pending"))).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.headers()[header::RETRY_AFTER], "1");
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn wrong_role_redirects_home() {
    let sessions = SessionStore::new();
    let _rx = sessions.open("alum");
    sessions.resolve("alum", Some(CurrentUser::new("a-1", "Alumni"))).expect("open");

    let response =
        app(&sessions, RoleSet::ADMIN).oneshot(request(Some("alum"))).await.expect("infallible");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/alumni");
}

#[tokio::test]
async fn allowed_role_reaches_handler() {
    let sessions = SessionStore::new();
    let _rx = sessions.open("stu");
    sessions.resolve("stu", Some(CurrentUser::new("s-1", "STUDENT"))).expect("open");

    let response =
        app(&sessions, RoleSet::STUDENT).oneshot(request(Some("stu"))).await.expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn rejects_unusable_config() {
    let mut cfg = AccessConfig::default();
    cfg.session_header = "bad header".to_owned();
    assert!(Access::from_config(&cfg).is_err());

    let mut cfg = AccessConfig::default();
    cfg.sign_in_path = "signin".to_owned();
    assert!(Access::from_config(&cfg).is_err());

    let mut cfg = AccessConfig::default();
    cfg.homes.student = "dashboard/student".to_owned();
    let err = Access::from_config(&cfg).expect_err("relative home");
    assert!(err.to_string().contains("access.homes.student"));

    let mut cfg = AccessConfig::default();
    cfg.homes.admin = "/admin\r\nSet-Cookie: x=1".to_owned();
    assert!(Access::from_config(&cfg).is_err());

    let mut cfg = AccessConfig::default();
    cfg.homes.alumni = "//elsewhere.example/alumni".to_owned();
    assert!(Access::from_config(&cfg).is_err());

    let mut cfg = AccessConfig::default();
    cfg.homes.faculty = "/staff/home?tab=grades".to_owned();
    assert!(Access::from_config(&cfg).is_ok());
}

#[tokio::test]
async fn require_roles_reads_from_api_state() {
    use campus_domain::config::ApiConfig;
    use campus_kernel::server::ApiState;

    let sessions = SessionStore::new();
    let _rx = sessions.open("fac");
    sessions.resolve("fac", Some(CurrentUser::new("f-1", "faculty"))).expect("open");

    let state = ApiState::builder()
        .config(ApiConfig::default())
        .sessions(sessions)
        .register_slice(campus_access::init(&AccessConfig::default()).expect("valid"))
        .build()
        .expect("state");

    let router = Router::new().route("/dashboard", get(|| async { "dashboard" }));
    let allowed: RoleSet = [Role::Faculty, Role::Admin].into_iter().collect();
    let gate = campus_access::server::require_roles(allowed, &state).expect("slice");
    let response = gate.protect(router).oneshot(request(Some("fac"))).await.expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);

    let empty = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    assert!(campus_access::server::require_roles(RoleSet::ADMIN, &empty).is_err());
}
