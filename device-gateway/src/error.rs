use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceGatewayError {
    #[error("cannot read payload file {path}: {source}")]
    Payload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to connect to device at {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stream payload to device: {0}")]
    Transfer(#[source] std::io::Error),

    #[error("failed to bind result port {port}: {source}")]
    Listen {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to accept result connection: {0}")]
    Accept(#[source] std::io::Error),

    #[error("failed to read result payload: {0}")]
    Receive(#[source] std::io::Error),

    #[error("result payload is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("framing violation: {0}")]
    Frame(String),
}

pub type Result<T> = std::result::Result<T, DeviceGatewayError>;
