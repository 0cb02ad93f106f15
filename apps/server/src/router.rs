use crate::dashboards;
use axum::Router;
use campus::domain::role::Role;
use campus::kernel::server::{ApiState, ApiStateError};
use campus::server::require_roles;
use campus::server::router::{notices_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Campus Portal API"))]
struct ApiDoc;

fn dashboard_routes() -> [(Role, OpenApiRouter<ApiState>); 4] {
    [
        (Role::Student, OpenApiRouter::new().routes(routes!(dashboards::student))),
        (Role::Faculty, OpenApiRouter::new().routes(routes!(dashboards::faculty))),
        (Role::Admin, OpenApiRouter::new().routes(routes!(dashboards::admin))),
        (Role::Alumni, OpenApiRouter::new().routes(routes!(dashboards::alumni))),
    ]
}

/// Assembles public routes, guarded dashboards and the API reference.
///
/// # Errors
/// Returns an error if the access slice is missing from `state`.
pub fn init(state: ApiState) -> Result<Router, ApiStateError> {
    // Separate the OpenAPI routes and the API documentation object
    let (public_routes, mut api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(notices_router())
        .split_for_parts();

    // Each dashboard gets its own guard, so the layer is applied per role group
    let mut app = Router::new().merge(public_routes);
    for (role, routes) in dashboard_routes() {
        let (routes, doc) = routes.split_for_parts();
        api_doc.merge(doc);
        app = app.merge(require_roles(role, &state)?.protect(routes));
    }

    let app = app.layer(TraceLayer::new_for_http()).with_state(state);
    Ok(app.merge(Scalar::with_url("/api", api_doc)))
}
