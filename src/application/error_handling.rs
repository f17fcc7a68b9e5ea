// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides a consistent error format for the CLI
// - Logs internal failures for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Meal missing or soft-deleted (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Battle rule violation (422)
    DomainError,

    /// Database/persistence error (500)
    Database,

    /// random.org failure (502)
    ExternalService,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::RecordNotFound(_) | AppError::RecordDeleted(_) => {
                Self::new(ErrorType::NotFound, error.to_string(), None)
            }

            AppError::DuplicateMeal(_) => {
                Self::new(ErrorType::Validation, error.to_string(), None)
            }

            AppError::Domain(domain_error) => match domain_error {
                DomainError::CapacityExceeded | DomainError::InsufficientCombatants => {
                    Self::new(ErrorType::DomainError, domain_error.to_string(), None)
                }
                other => Self::new(ErrorType::Validation, other.to_string(), None),
            },

            AppError::Random(random_error) => Self::new(
                ErrorType::ExternalService,
                "External service error".to_string(),
                Some(random_error.to_string()),
            ),

            AppError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed".to_string(), None)
            }

            other => {
                error!("Internal error: {}", other);
                Self::new(ErrorType::Internal, other.to_string(), None)
            }
        }
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }
}
