//! User lookup by identifier.
//!
//! Outcomes, first match wins:
//! - `OPTIONS` → 200 preflight acknowledgement, no lookup
//! - missing or empty `userId` → 400
//! - no record → 404
//! - record → 200 with the record as body
//! - any other failure → 500 with a generic body, detail logged

use http::StatusCode;
use service_core::error::AppError;

use crate::{
    models::{GatewayRequest, GatewayResponse, UserRecord},
    services::UserStore,
    AppState,
};

/// Query parameter carrying the identifier.
pub const USER_ID_PARAM: &str = "userId";

pub const MISSING_USER_ID: &str = "userId is required";
pub const USER_NOT_FOUND: &str = "User not found";

/// Produce exactly one response for the request. Never fails.
pub async fn handle(state: &AppState, request: GatewayRequest) -> GatewayResponse {
    if request.is_preflight() {
        tracing::debug!("Answering CORS preflight");
        return GatewayResponse::preflight(&state.cors);
    }

    let result = lookup_user(state.store.as_ref(), &request)
        .await
        .and_then(|record| GatewayResponse::json(StatusCode::OK, &state.cors, &record));

    match result {
        Ok(response) => {
            tracing::info!(status = response.status_code, "User found");
            response
        }
        Err(err) => {
            if err.is_server_error() {
                tracing::error!(error = ?err, "User lookup failed");
            } else {
                tracing::info!(
                    status = err.status_code().as_u16(),
                    reason = %err,
                    "User lookup rejected"
                );
            }
            GatewayResponse::from_error(&err, &state.cors)
        }
    }
}

async fn lookup_user(
    store: &dyn UserStore,
    request: &GatewayRequest,
) -> Result<UserRecord, AppError> {
    let user_id = request
        .query_param(USER_ID_PARAM)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_USER_ID.to_string()))?;

    tracing::debug!(user_id = %user_id, "Fetching user");

    store
        .get_user(user_id)
        .await
        .map_err(AppError::DatabaseError)?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
}
