//! Error type for the sample binary.

use hyperclient::{ClientError, ConfigError};
use thiserror::Error;

/// Everything that can stop the sample run.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The shared configuration could not be built.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A client operation failed.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}
