use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("device hand-off failed: {0}")]
    Device(#[from] device_gateway::DeviceGatewayError),

    #[error("failed to stage capture {path}: {source}")]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("device returned an empty transcript")]
    EmptyTranscript,
}

pub type RecognitionResult<T> = Result<T, RecognitionError>;
