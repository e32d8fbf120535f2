use thiserror::Error;

/// Errors raised when turning control input (field names, typed text) into
/// model values. Geometry itself is infallible.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown scale field `{0}`")]
    UnknownField(String),
    #[error("invalid number `{value}` for {field}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown impact type `{0}`")]
    UnknownImpact(String),
}
