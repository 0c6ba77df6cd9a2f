//! # Errors
//!
//! Every failure in lgbrowse is fatal. The variants exist so the caller can
//! pick an exit code and decide whether the message gets the error color.

use thiserror::Error;

use crate::core::config::ConfigError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A page request failed. `page` is 1-based.
#[derive(Debug, Error)]
#[error("failed to list log groups (page {page}): {source}")]
pub struct FetchError {
    pub page: usize,
    #[source]
    pub source: BoxError,
}

impl FetchError {
    pub fn new(page: usize, source: impl Into<BoxError>) -> Self {
        Self {
            page,
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Config file unreadable or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The credential chain produced no credentials.
    #[error("failed to load AWS configuration: {0}")]
    AwsSession(String),
    /// `GetCallerIdentity` was rejected.
    #[error("Bad AWS Credentials: {0}")]
    Identity(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Terminal setup, draw or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) | AppError::AwsSession(_) => 2,
            AppError::Identity(_) => 3,
            AppError::Fetch(_) => 4,
            AppError::Terminal(_) => 5,
        }
    }

    /// Configuration and credential problems are printed in the error color.
    pub fn is_styled(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::AwsSession(_) | AppError::Identity(_)
        )
    }
}
