use async_trait::async_trait;
use device_gateway::DeviceTransferClient;
use std::path::Path;

/// Seam between the recognition flows and the physical board.
///
/// The production implementation is [`DeviceTransferClient`]; tests swap in
/// an in-memory double so the flows run without sockets.
#[async_trait]
pub trait DeviceTransport: Send + Sync {
    /// Hand one staged file to the board and return its raw answer.
    async fn exchange_file(&self, path: &Path) -> device_gateway::Result<String>;
}

#[async_trait]
impl DeviceTransport for DeviceTransferClient {
    async fn exchange_file(&self, path: &Path) -> device_gateway::Result<String> {
        self.exchange(path).await
    }
}
