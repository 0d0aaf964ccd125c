//! Error types for custdash-data

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid document at {location}: {message}")]
    InvalidDocument {
        location: String,
        message: String,
    },

    #[error("IO error")]
    IoError(#[from] io::Error),

    #[error("Internal error")]
    InternalError,
}
