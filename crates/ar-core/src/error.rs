use thiserror::Error;

/// Errors raised while building a viewer or parsing shell input.
///
/// The pose and input operations themselves never fail; everything here is
/// detected up front, before any event is processed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("min scale {min} exceeds max scale {max}")]
    InvalidScaleRange { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("invalid value {value:?} for config key {key:?}")]
    InvalidOverride { key: String, value: String },
    #[error("unknown control button {0:?}")]
    UnknownButton(String),
}

pub type Result<T> = std::result::Result<T, Error>;
