use device_gateway::DeviceEndpoint;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_TEMP_DIR: &str = "temp";
const DEFAULT_SAMPLE_RATE: u32 = 16_000;
const DEFAULT_RECORD_SECONDS: u64 = 3;

/// Recognition service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Where the recognition board lives.
    pub device: DeviceEndpoint,
    /// Staging directory for captured files awaiting hand-off.
    pub temp_dir: PathBuf,
    /// Sample rate the kiosk microphone records at.
    pub sample_rate: u32,
    /// Length of one voice capture in seconds.
    pub record_seconds: u64,
}

impl RecognitionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let temp_dir = std::env::var("KIOSK_TEMP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMP_DIR));

        let sample_rate = std::env::var("AUDIO_SAMPLE_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SAMPLE_RATE);

        let record_seconds = std::env::var("AUDIO_RECORD_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RECORD_SECONDS);

        Self {
            device: DeviceEndpoint::from_env(),
            temp_dir,
            sample_rate,
            record_seconds,
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            device: DeviceEndpoint::default(),
            temp_dir: PathBuf::from(DEFAULT_TEMP_DIR),
            sample_rate: DEFAULT_SAMPLE_RATE,
            record_seconds: DEFAULT_RECORD_SECONDS,
        }
    }
}
