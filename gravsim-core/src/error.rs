use crate::body::BodyId;
use thiserror::Error;

/// Rejected user input. Never fatal: the requested operation is aborted and
/// the engine state is left as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("fill in the name field")]
    MissingName,

    #[error("invalid number format")]
    InvalidNumber { field: &'static str },

    #[error("action would cause a collision")]
    WouldCollide,

    #[error("no objects to edit!")]
    NothingToEdit,

    #[error("no object selected for editing")]
    NoBodySelected,

    #[error("object {0} does not exist")]
    UnknownBody(BodyId),

    #[error("simulation speed must be a positive number")]
    InvalidSpeed,
}

/// Failure to load or validate an [`EngineConfig`](crate::config::EngineConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
