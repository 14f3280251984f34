//! Error types for the tagscript toolchain
//!
//! Tokenizing itself is total and has no error cases; these errors cover
//! the fallible surface around it (file I/O and token serialization in
//! the demo driver).

use thiserror::Error;

/// tagscript toolchain errors
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a source file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the token stream failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for tagscript operations
pub type Result<T> = std::result::Result<T, Error>;
