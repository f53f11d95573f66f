use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmbientError {
    #[error("invalid hex color `{0}`")]
    InvalidColor(String),
    #[error("attribute `{name}` is not a number: `{value}`")]
    InvalidAttribute { name: &'static str, value: String },
}

pub type AmbientResult<T> = Result<T, AmbientError>;
