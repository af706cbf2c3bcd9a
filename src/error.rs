//! Router errors.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not find element with id \"{0}\"; router outlet not created")]
    MountTargetMissing(String),

    #[error("route with name \"{0}\" not found")]
    RouteNotFound(String),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
