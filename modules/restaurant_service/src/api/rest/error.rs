//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::RestaurantError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

impl From<RestaurantError> for Problem {
    fn from(error: RestaurantError) -> Self {
        map_domain_error(error)
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: RestaurantError) -> Problem {
    match error {
        RestaurantError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found")
                .with_detail(format!("{} with id '{}' was not found", resource, id))
        }

        RestaurantError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        RestaurantError::InvalidEnumValue { field, value } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Enum Value")
                .with_detail(format!("'{}' is not a valid value for {}", value, field))
        }

        RestaurantError::Conflict { reason } => {
            Problem::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
        }

        RestaurantError::InvalidTransition { from, to } => {
            Problem::new(StatusCode::CONFLICT, "Invalid Status Transition")
                .with_detail(format!("order cannot move from {} to {}", from, to))
        }

        RestaurantError::Internal => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (RestaurantError::not_found("order", 1), 404),
            (RestaurantError::validation("bad"), 400),
            (
                RestaurantError::InvalidEnumValue {
                    field: "status".to_string(),
                    value: "DONE".to_string(),
                },
                400,
            ),
            (RestaurantError::conflict("dup"), 409),
            (
                RestaurantError::InvalidTransition {
                    from: "PAID".to_string(),
                    to: "READY".to_string(),
                },
                409,
            ),
            (RestaurantError::Internal, 500),
        ];

        for (error, status) in cases {
            let problem = map_domain_error(error);
            assert_eq!(problem.status, status);
            assert_eq!(problem.type_uri, format!("https://httpstatuses.io/{}", status));
        }
    }

    #[test]
    fn internal_error_hides_details() {
        let problem = map_domain_error(RestaurantError::Internal);
        assert_eq!(problem.detail.as_deref(), Some("An unexpected error occurred"));
    }
}
