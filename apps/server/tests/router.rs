use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use campus::domain::config::ApiConfig;
use campus::domain::session::CurrentUser;
use campus::kernel::security::session::SessionStore;
use campus_server::Server;
use serde_json::Value;
use tower::ServiceExt;

fn server(sessions: &SessionStore) -> Server {
    Server::builder().config(ApiConfig::default()).sessions(sessions.clone()).build().unwrap()
}

fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(id) = session {
        builder = builder.header("x-session-id", id);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn public_routes_need_no_session() {
    let sessions = SessionStore::new();
    let app = server(&sessions).router().unwrap();

    let response = app.clone().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/notices", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["total"], 0);
}

#[tokio::test]
async fn dashboards_follow_the_guard() {
    let sessions = SessionStore::new();
    let app = server(&sessions).router().unwrap();

    let response = app.clone().oneshot(get("/dashboard/admin", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/signin");

    let _rx = sessions.open("s");
    let response = app.clone().oneshot(get("/dashboard/faculty", Some("s"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    sessions.resolve("s", Some(CurrentUser::new("u-1", " Faculty "))).unwrap();
    let response = app.clone().oneshot(get("/dashboard/faculty", Some("s"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["role"], "faculty");
    assert!(body["sections"].as_array().unwrap().iter().any(|s| s == "grade-entry"));

    let response = app.oneshot(get("/dashboard/student", Some("s"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/faculty");
}

#[tokio::test]
async fn sign_out_revokes_dashboard() {
    let sessions = SessionStore::new();
    let app = server(&sessions).router().unwrap();

    let _rx = sessions.open("a");
    sessions.resolve("a", Some(CurrentUser::new("u-2", "alumni"))).unwrap();
    let response = app.clone().oneshot(get("/dashboard/alumni", Some("a"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    sessions.sign_out("a").unwrap();
    let response = app.oneshot(get("/dashboard/alumni", Some("a"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/signin");
}

#[test]
fn missing_notice_file_fails_bootstrap() {
    let mut cfg = ApiConfig::default();
    cfg.notices.source = Some("/nonexistent/notices.json".into());
    assert!(Server::builder().config(cfg).build().is_err());
}
