//! Unified error type for the engine, the store and the config layer.
//!
//! Commands wrap these in `anyhow::Error`; the binary decides the exit status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Failed to read from the record store: {0}")]
    StoreRead(#[source] rusqlite::Error),

    #[error("Failed to write to the record store: {0}")]
    StoreWrite(#[source] rusqlite::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
