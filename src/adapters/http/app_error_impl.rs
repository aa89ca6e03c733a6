use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tgauth_types::VerificationError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Verification(err) => {
                tracing::warn!(code = %err.code(), "Request rejected");
                let status = match err {
                    VerificationError::MalformedClaims(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::UNAUTHORIZED,
                };
                error_resp(status, err.code().as_str(), None)
            }
            AppError::InvalidInput(msg) => {
                tracing::warn!(message = %msg, "Request rejected");
                error_resp(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidInput.as_str(),
                    Some(msg),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.as_str(),
                    None,
                )
            }
        }
    }
}

fn error_resp(status: StatusCode, code: &str, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code, "message": msg }),
        None => serde_json::json!({ "code": code }),
    };
    (status, Json(body)).into_response()
}
