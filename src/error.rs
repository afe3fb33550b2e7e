//! Error types for the simulator

use thiserror::Error;

/// Simulator result type
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while building the report
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(#[from] aws_sdk_ec2::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SimulatorError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Convert from EC2 SDK error
    pub fn from_ec2<E>(err: E) -> Self
    where
        aws_sdk_ec2::Error: From<E>,
    {
        Self::Aws(aws_sdk_ec2::Error::from(err))
    }
}
