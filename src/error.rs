//! Error types for the smoothing filters

use crate::filters::FilterMode;
use thiserror::Error;

/// Errors raised while configuring or running a smoothing filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// Invalid construction parameters
    #[error("invalid filter configuration: {0}")]
    Configuration(String),

    /// The selected mode has no combination rule
    #[error("filter mode {0:?} is not implemented")]
    NotImplemented(FilterMode),

    /// A sample component was NaN or infinite
    #[error("sample contains a non-finite component")]
    InvalidSample,

    #[error("joint '{0}' is not being tracked")]
    UnknownJoint(String),

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
