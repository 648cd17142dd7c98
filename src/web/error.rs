use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::service::conflict::ConflictReport;
use crate::service::ServiceError;
use crate::web::validate::FieldErrors;

/// Body returned for conflicts and faults: the human text, the raw store
/// detail for diagnostics, the numeric status and a timestamp.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub status: u16,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug)]
pub enum WebError {
    /// Client, or a nested entity claimed through it, is absent. Maps to an
    /// empty 404; absence is routine and carries no body.
    NotFound,
    /// Classified uniqueness conflict.
    Conflict(ConflictReport),
    /// Field-level validation failures, keyed by field name.
    Validation(FieldErrors),
    /// Store failure outside the conflict taxonomy.
    Storage(String),
}

impl From<ServiceError> for WebError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Conflict(report) => Self::Conflict(report),
            ServiceError::Storage(err) => Self::Storage(err.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Conflict(report) => {
                let body = ErrorBody {
                    error: report.message,
                    message: report.detail,
                    status: StatusCode::CONFLICT.as_u16(),
                    date_time: report.at,
                };
                (StatusCode::CONFLICT, Json(body)).into_response()
            }
            Self::Validation(fields) => (StatusCode::BAD_REQUEST, Json(fields)).into_response(),
            Self::Storage(message) => {
                error!(%message, "storage fault");
                let body = ErrorBody {
                    error: "storage fault".to_string(),
                    message,
                    status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    date_time: Utc::now(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;
