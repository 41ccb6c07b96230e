use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::{SENTINEL_STATUS_ERROR, SENTINEL_STATUS_HEADER};
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("internal error: {0}")]
    ScoringFailed(#[from] ScoringError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, sentinel_status) = match &self {
            GatewayError::ScoringFailed(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.kind()),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SENTINEL_STATUS_HEADER,
            HeaderValue::from_str(sentinel_status)
                .unwrap_or(HeaderValue::from_static(SENTINEL_STATUS_ERROR)),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
