use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vagtull_core::fee::FeeError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Fee(#[from] FeeError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Fee(e) => match e {
                FeeError::MultiDayEntries | FeeError::UnknownVehicle(_) => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                // Upstream holiday lookup failed; the client may retry.
                FeeError::Holiday(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
