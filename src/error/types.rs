// src/error/types.rs
use crate::domain::{DomainError, MealKey};
use crate::integrations::random_org::RandomError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Meal with {0} not found")]
    RecordNotFound(MealKey),

    #[error("Meal with {0} has been deleted")]
    RecordDeleted(MealKey),

    #[error("Meal with name '{0}' already exists")]
    DuplicateMeal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_errors_name_the_lookup_key() {
        let err = AppError::RecordNotFound(MealKey::Id(999));
        assert_eq!(err.to_string(), "Meal with ID 999 not found");

        let err = AppError::RecordDeleted(MealKey::Name("Pizza".to_string()));
        assert_eq!(err.to_string(), "Meal with name Pizza has been deleted");
    }

    #[test]
    fn test_random_errors_are_transparent() {
        let err = AppError::from(RandomError::Timeout);
        assert_eq!(err.to_string(), "Request to random.org timed out.");
    }

    #[test]
    fn test_serializes_as_message() {
        let err = AppError::DuplicateMeal("Pizza".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Meal with name 'Pizza' already exists\"");
    }
}
