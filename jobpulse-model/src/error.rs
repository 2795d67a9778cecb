use std::fmt::{self, Display};

/// Errors produced by model constructors.
#[derive(Debug)]
pub enum ModelError {
    InvalidRecord(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRecord(msg) => {
                write!(f, "invalid record: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
