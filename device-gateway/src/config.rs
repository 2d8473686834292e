use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Address the reference board firmware ships with.
pub const DEFAULT_DEVICE_HOST: &str = "192.168.137.100";
/// Port the board accepts captured files on.
pub const DEFAULT_PUSH_PORT: u16 = 9999;
/// Port the board connects back to with the recognition result.
pub const DEFAULT_RESULT_PORT: u16 = 9998;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RESULT_WAIT_TIMEOUT: Duration = Duration::from_secs(60);

/// Network endpoint of the recognition board.
///
/// The firmware owns the two-port convention: `push_port` receives input
/// files, `result_port` is where it delivers results. The timeouts bound
/// every wait on our side; raise them to approximate the firmware's own
/// wait-forever behavior if a deployment needs that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceEndpoint {
    pub host: String,
    pub push_port: u16,
    pub result_port: u16,
    /// Deadline for establishing the outbound push connection.
    pub connect_timeout: Duration,
    /// Deadline for any single socket read or write.
    pub io_timeout: Duration,
    /// Deadline for the board to connect back with a result.
    pub result_wait_timeout: Duration,
}

impl DeviceEndpoint {
    pub fn new(host: impl Into<String>, push_port: u16, result_port: u16) -> Self {
        Self {
            host: host.into(),
            push_port,
            result_port,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            io_timeout: DEFAULT_IO_TIMEOUT,
            result_wait_timeout: DEFAULT_RESULT_WAIT_TIMEOUT,
        }
    }

    /// Load the endpoint from environment variables, falling back to the
    /// reference firmware values.
    pub fn from_env() -> Self {
        let host = std::env::var("DEVICE_HOST").unwrap_or_else(|_| DEFAULT_DEVICE_HOST.to_string());

        let push_port = std::env::var("DEVICE_PUSH_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PUSH_PORT);

        let result_port = std::env::var("DEVICE_RESULT_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RESULT_PORT);

        let connect_timeout = std::env::var("DEVICE_CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT);

        let io_timeout = std::env::var("DEVICE_IO_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_IO_TIMEOUT);

        let result_wait_timeout = std::env::var("DEVICE_RESULT_WAIT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RESULT_WAIT_TIMEOUT);

        Self {
            host,
            push_port,
            result_port,
            connect_timeout,
            io_timeout,
            result_wait_timeout,
        }
    }

    /// `host:push_port`, the address captured files are pushed to.
    pub fn push_addr(&self) -> String {
        format!("{}:{}", self.host, self.push_port)
    }
}

impl Default for DeviceEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_HOST, DEFAULT_PUSH_PORT, DEFAULT_RESULT_PORT)
    }
}
