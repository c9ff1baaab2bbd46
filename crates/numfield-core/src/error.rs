use numfield_model::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid acceptance grammar `{pattern}`: {source}")]
    Grammar {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, FieldError>;
