//! Error payloads returned by the HTTP handlers.
//!
//! Every failure reaches the caller as `{"error_code": ..., "message": ...}`.
//! Validation failures are sent as an array of these objects, one per
//! violated rule.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::StatusPolicy;

pub const RIDES_NOT_FOUND_MESSAGE: &str = "Could not find any rides";
pub const SERVER_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    RidesNotFoundError,
    ServerError,
}

impl ErrorCode {
    /// Status code for this error under the given policy.
    pub fn status(self, policy: StatusPolicy) -> StatusCode {
        match (policy, self) {
            (StatusPolicy::Legacy, _) => StatusCode::OK,
            (StatusPolicy::Rest, ErrorCode::ValidationError) => StatusCode::BAD_REQUEST,
            (StatusPolicy::Rest, ErrorCode::RidesNotFoundError) => StatusCode::NOT_FOUND,
            (StatusPolicy::Rest, ErrorCode::ServerError) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error_code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error_code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            error_code: ErrorCode::RidesNotFoundError,
            message: RIDES_NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Storage failures are reported without any detail from the underlying error.
    pub fn server() -> Self {
        Self {
            error_code: ErrorCode::ServerError,
            message: SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.error_code, self.message)
    }
}

impl std::error::Error for ApiError {}
