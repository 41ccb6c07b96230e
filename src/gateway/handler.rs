use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, instrument};

use crate::constants::{SENTINEL_STATUS_HEADER, SENTINEL_STATUS_SCORED};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::ProfileRequest;
use crate::gateway::state::HandlerState;
use crate::profile::ProfileInput;

#[instrument(skip(state, request), fields(user_id = %request.user_id))]
pub async fn check_profile_handler(
    State(state): State<HandlerState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Response, GatewayError> {
    let profile = ProfileInput::from(request);

    let result = state.scorer.score_profile(&profile).map_err(|e| {
        error!(error = %e, kind = e.kind(), "Scoring failed");
        GatewayError::ScoringFailed(e)
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SENTINEL_STATUS_HEADER,
        HeaderValue::from_static(SENTINEL_STATUS_SCORED),
    );

    Ok((StatusCode::OK, headers, Json(result)).into_response())
}
