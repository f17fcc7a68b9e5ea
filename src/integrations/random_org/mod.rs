// src/integrations/random_org/mod.rs
//
// Random number source
//
// The battle service only sees the `RandomSource` trait; random.org is the
// production implementation.

pub mod client;

pub use client::{parse_random_response, RandomOrgClient, DEFAULT_RANDOM_ORG_URL, DEFAULT_TIMEOUT};

use thiserror::Error;

use crate::error::AppResult;

/// Source of a single decimal draw in [0, 1)
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    fn get_random(&self) -> AppResult<f64>;
}

/// Failures of the random number provider
#[derive(Debug, Error)]
pub enum RandomError {
    #[error("Request to random.org failed: {0}")]
    RequestFailed(String),

    #[error("Request to random.org timed out.")]
    Timeout,

    #[error("Invalid response from random.org: {0}")]
    InvalidResponse(String),
}
