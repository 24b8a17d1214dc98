extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),
}

/// Table and pattern errors, raised while the lemmatizer is being built.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Table File Error: {0}")]
    File(io::ErrorKind),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Unknown part of speech in table: {0}")]
    UnknownPos(String),

    #[error("Rule Error: delete length {delete} exceeds suffix '{suffix}'")]
    Rule { suffix: String, delete: usize },

    #[error("Pattern Error: {0}")]
    Pattern(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Writer Error: {0}")]
    Writer(io::ErrorKind),
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Serialization(error.to_string())
    }
}

impl From<regex::Error> for ConfigError {
    fn from(error: regex::Error) -> Self {
        ConfigError::Pattern(error.to_string())
    }
}
