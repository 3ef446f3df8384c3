//! Contract error types for restaurant service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! problem responses.

use thiserror::Error;

/// Restaurant service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestaurantError {
    /// Menu item, table or order not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (menu_item, table, order)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Malformed or out-of-range input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Value outside a recognized enumeration
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnumValue { field: String, value: String },

    /// Duplicate table number, or delete of a still-referenced entity
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Status move rejected by strict transition rules
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Storage failure; details are logged, not returned
    #[error("Internal error")]
    Internal,
}

impl RestaurantError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }
}
