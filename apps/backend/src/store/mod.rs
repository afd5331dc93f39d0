//! Key-value session store capability.
//!
//! Everything the game persists is a string under a flat key (see [`keys`]).
//! No transactions span keys; callers order their writes instead.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};

pub mod keys;
mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store call `{0}` timed out")]
    Timeout(&'static str),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt value at `{key}`: {detail}")]
    Corrupt { key: String, detail: String },
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let kind = match &err {
            StoreError::Timeout(_) => InfraErrorKind::Timeout,
            StoreError::Unavailable(_) => InfraErrorKind::StoreUnavailable,
            StoreError::Corrupt { .. } => InfraErrorKind::DataCorruption,
        };
        DomainError::infra(kind, err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        DomainError::from(err).into()
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites any prior value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Atomically increments the integer at `key`, treating absent as 0.
    /// Returns the new value.
    async fn increment(&self, key: &str) -> Result<i64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
