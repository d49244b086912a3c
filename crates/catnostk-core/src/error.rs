//! Error types for catnostk operations.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("Invalid date specification: {0}")]
    InvalidSpec(String),

    #[error("Calendar error: {0}")]
    Calendar(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Timed out after {0:?} waiting for standard input")]
    InputTimeout(Duration),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatError>;
