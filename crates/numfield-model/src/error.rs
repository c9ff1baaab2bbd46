use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field '{field}': min ({min}) is greater than max ({max})")]
    InvalidBounds { field: String, min: f64, max: f64 },
    #[error("field '{field}': {bound} bound is not a finite number")]
    NonFiniteBound { field: String, bound: &'static str },
    #[error("field '{field}': verbatim token list contains a blank entry")]
    EmptyToken { field: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
