use crate::Notices;
use crate::error::NoticeError;
use crate::lifecycle::classify;
use crate::query::NoticeQuery;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campus_domain::constants::NOTICES_TAG;
use campus_domain::notice::Notice;
use campus_kernel::server::ApiState;
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// A notice as listed to clients, with its derived archive flag.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeView {
    id: String,
    title: String,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    is_archived: bool,
}

impl From<Notice> for NoticeView {
    fn from(n: Notice) -> Self {
        Self {
            id: n.id,
            title: n.title,
            date: n.date,
            expiry_date: n.expiry_date,
            description: n.description,
            category: n.category,
            is_archived: n.is_archived,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoticeList {
    total: usize,
    notices: Vec<NoticeView>,
}

#[derive(Debug, Serialize, ToSchema)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for NoticeError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedExpiryDate { .. }
            | Self::Io { .. }
            | Self::Decode { .. }
            | Self::Internal { .. } => {
                error!(error = %self, "Notice request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            },
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

fn slice(state: &ApiState) -> Result<&Notices, NoticeError> {
    state.try_get_slice::<Notices>().map_err(|e| NoticeError::from(e.to_string()))
}

#[utoipa::path(
    get,
    path = "/api/notices",
    params(NoticeQuery),
    responses(
        (status = OK, description = "Notices in source order", body = NoticeList),
        (status = BAD_REQUEST, description = "Unknown status filter"),
    ),
    tag = NOTICES_TAG,
)]
pub(crate) async fn list_notices(
    State(state): State<ApiState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Json<NoticeList>, NoticeError> {
    let notices = query.apply(&slice(&state)?.source.notices());
    debug!(status = %query.status, count = notices.len(), "Listing notices");

    Ok(Json(NoticeList {
        total: notices.len(),
        notices: notices.into_iter().map(NoticeView::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/notices/{id}",
    params(("id" = String, Path, description = "Notice id")),
    responses(
        (status = OK, description = "Single notice", body = NoticeView),
        (status = NOT_FOUND, description = "No such notice", body = ErrorBody),
    ),
    tag = NOTICES_TAG,
)]
pub(crate) async fn get_notice(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<NoticeView>, NoticeError> {
    let notices = slice(&state)?.source.notices();
    let found = notices.into_iter().find(|n| n.id == id).ok_or_else(|| NoticeError::NotFound {
        message: id.clone().into(),
        context: None,
    })?;

    let classified = classify(std::slice::from_ref(&found)).pop().unwrap_or(found);
    Ok(Json(classified.into()))
}

/// Public notice endpoints.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(list_notices)).routes(routes!(get_notice))
}
