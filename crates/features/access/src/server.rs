//! HTTP binding of the guard.
//!
//! A request is one render pass: the session is read from the [`SessionStore`]
//! by the id in the configured header and the decision maps onto a response.
//!
//! | State             | Response                                 |
//! |-------------------|------------------------------------------|
//! | `LOADING`         | `503` with `Retry-After: 1`, empty body   |
//! | `UNAUTHENTICATED` | `303` to the sign-in page                 |
//! | `FORBIDDEN`       | `303` to the role's landing page          |
//! | `AUTHORIZED`      | inner handler                             |

use crate::Access;
use crate::guard::{GuardDecision, decide};
use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use campus_domain::role::RoleSet;
use campus_domain::session::Session;
use campus_kernel::security::session::SessionStore;
use campus_kernel::server::{ApiState, ApiStateError};
use tracing::debug;

/// Builds a [`Gate`] admitting `allowed`, taking the access slice and session
/// store from `state`.
///
/// # Errors
/// Returns [`ApiStateError::MissingSlice`] if the access slice was not registered.
pub fn require_roles(allowed: impl Into<RoleSet>, state: &ApiState) -> Result<Gate, ApiStateError> {
    let access = state.try_get_slice::<Access>()?.clone();
    Ok(Gate::new(allowed.into(), access, state.sessions.clone()))
}

/// Middleware state for one protected route group.
#[derive(Debug, Clone)]
pub struct Gate {
    allowed: RoleSet,
    access: Access,
    sessions: SessionStore,
}

impl Gate {
    #[must_use]
    pub const fn new(allowed: RoleSet, access: Access, sessions: SessionStore) -> Self {
        Self { allowed, access, sessions }
    }

    /// Wraps every route already present on `router` with the guard.
    pub fn protect<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn_with_state(self, guard_request))
    }

    fn session_for(&self, request: &Request) -> Session {
        request
            .headers()
            .get(self.access.session_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(Session::anonymous, |id| self.sessions.get(id))
    }
}

/// Axum middleware entry point; see the module table for the mapping.
pub async fn guard_request(State(gate): State<Gate>, request: Request, next: Next) -> Response {
    let session = gate.session_for(&request);
    let decision = decide(&session, gate.allowed, &gate.access.policy);

    debug!(
        path = %request.uri().path(),
        state = %decision.state(),
        destination = decision.destination(),
        "Access guard decision"
    );

    match decision {
        GuardDecision::Render => next.run(request).await,
        GuardDecision::Wait => {
            (StatusCode::SERVICE_UNAVAILABLE, [(header::RETRY_AFTER, HeaderValue::from_static("1"))])
                .into_response()
        },
        GuardDecision::SignIn(to) | GuardDecision::Redirect(to) => Redirect::to(to).into_response(),
    }
}
