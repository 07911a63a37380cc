// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every network, status or decoding failure ends up here
    #[error("{0}")]
    RequestFailed(String),
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),
}
