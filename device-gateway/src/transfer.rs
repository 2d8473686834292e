use std::net::Ipv4Addr;
use std::path::Path;
use std::time::Duration;

use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::DeviceEndpoint;
use crate::error::{DeviceGatewayError, Result};
use crate::framing;

/// Read granularity on the result socket. Matches the board firmware's own
/// send chunking, though correctness does not depend on it.
const RECV_CHUNK: usize = 4096;

/// Client side of the board hand-off.
///
/// One logical request is strictly sequential: push a whole file over one
/// connection, then receive one whole result over a second. The client
/// holds no connection state between requests.
pub struct DeviceTransferClient {
    endpoint: DeviceEndpoint,
}

impl DeviceTransferClient {
    pub fn new(endpoint: DeviceEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &DeviceEndpoint {
        &self.endpoint
    }

    /// Stream a captured file to the board's push port.
    ///
    /// The whole file goes out over one connection with no framing and no
    /// acknowledgement; the board takes our shutdown as end-of-payload.
    /// Returns the number of bytes delivered.
    pub async fn push_file(&self, path: &Path) -> Result<u64> {
        let payload = fs::read(path).await.map_err(|source| DeviceGatewayError::Payload {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = payload.len(), "pushing captured file to device");
        self.push_bytes(&payload).await
    }

    /// Like [`push_file`](Self::push_file) for payloads already in memory.
    pub async fn push_bytes(&self, payload: &[u8]) -> Result<u64> {
        let mut stream = self.connect().await?;

        timeout(self.endpoint.io_timeout, stream.write_all(payload))
            .await
            .map_err(|_| DeviceGatewayError::Timeout {
                operation: "payload transfer",
                timeout: self.endpoint.io_timeout,
            })?
            .map_err(DeviceGatewayError::Transfer)?;

        stream.shutdown().await.map_err(DeviceGatewayError::Transfer)?;
        debug!(bytes = payload.len(), "payload delivered");

        Ok(payload.len() as u64)
    }

    /// Bind the result port ahead of a hand-off.
    pub async fn result_listener(&self) -> Result<ResultListener> {
        ResultListener::bind(
            self.endpoint.result_port,
            self.endpoint.result_wait_timeout,
            self.endpoint.io_timeout,
        )
        .await
    }

    /// Bind the result port and block for one result.
    ///
    /// Prefer [`exchange`](Self::exchange), which binds before pushing;
    /// this exists for callers that sequence the two halves themselves.
    pub async fn receive_result(&self) -> Result<String> {
        self.result_listener().await?.recv().await
    }

    /// One full hand-off: push a captured file, return the board's answer.
    ///
    /// The result listener is bound before the push so a fast board cannot
    /// connect back before anyone is listening.
    pub async fn exchange(&self, path: &Path) -> Result<String> {
        let listener = self.result_listener().await?;
        self.push_file(path).await?;
        listener.recv().await
    }

    /// Framed request/response over a single connection, for firmware
    /// builds that understand length-prefixed payloads.
    pub async fn exchange_framed(&self, path: &Path) -> Result<String> {
        let payload = fs::read(path).await.map_err(|source| DeviceGatewayError::Payload {
            path: path.to_path_buf(),
            source,
        })?;

        let mut stream = self.connect().await?;

        timeout(self.endpoint.io_timeout, framing::write_frame(&mut stream, &payload))
            .await
            .map_err(|_| DeviceGatewayError::Timeout {
                operation: "framed transfer",
                timeout: self.endpoint.io_timeout,
            })??;

        let response = timeout(
            self.endpoint.result_wait_timeout,
            framing::read_frame(&mut stream),
        )
        .await
        .map_err(|_| DeviceGatewayError::Timeout {
            operation: "framed result wait",
            timeout: self.endpoint.result_wait_timeout,
        })??;

        Ok(String::from_utf8(response)?)
    }

    async fn connect(&self) -> Result<TcpStream> {
        let addr = self.endpoint.push_addr();
        let stream = timeout(self.endpoint.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| DeviceGatewayError::Timeout {
                operation: "device connect",
                timeout: self.endpoint.connect_timeout,
            })?
            .map_err(|source| DeviceGatewayError::Connect { addr: addr.clone(), source })?;
        debug!(addr = %addr, "connected to device");
        Ok(stream)
    }
}

/// A bound, single-use listener for one recognition result.
///
/// The firmware delivers each result as one raw UTF-8 stream over a fresh
/// connection and signals completion by closing. The port is a firmware
/// constant shared by every request, so two in-flight requests would race
/// for it; binding per request makes the second one fail fast with
/// [`DeviceGatewayError::Listen`] instead of silently stealing a result.
#[derive(Debug)]
pub struct ResultListener {
    listener: TcpListener,
    port: u16,
    wait_timeout: Duration,
    io_timeout: Duration,
}

impl ResultListener {
    /// Bind `0.0.0.0:port`. Port 0 resolves to an ephemeral port,
    /// readable afterwards via [`port`](Self::port).
    pub async fn bind(port: u16, wait_timeout: Duration, io_timeout: Duration) -> Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .map_err(|source| DeviceGatewayError::Listen { port, source })?;
        let port = listener
            .local_addr()
            .map_err(|source| DeviceGatewayError::Listen { port, source })?
            .port();
        debug!(port, "result listener bound");

        Ok(Self {
            listener,
            port,
            wait_timeout,
            io_timeout,
        })
    }

    /// Port actually bound.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Accept exactly one connection and drain it to end of stream.
    ///
    /// A peer that sends nothing and closes yields the empty string. The
    /// listener is consumed, so the port is free again on return.
    pub async fn recv(self) -> Result<String> {
        info!(port = self.port, "waiting for recognition result");

        let (conn, peer) = timeout(self.wait_timeout, self.listener.accept())
            .await
            .map_err(|_| DeviceGatewayError::Timeout {
                operation: "result wait",
                timeout: self.wait_timeout,
            })?
            .map_err(DeviceGatewayError::Accept)?;
        debug!(peer = %peer, "result connection accepted");

        let payload = self.drain(conn).await?;
        let text = String::from_utf8(payload)?;
        debug!(chars = text.chars().count(), "result payload decoded");

        Ok(text)
    }

    async fn drain(&self, mut conn: TcpStream) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        let mut chunk = [0u8; RECV_CHUNK];

        loop {
            let n = timeout(self.io_timeout, conn.read(&mut chunk))
                .await
                .map_err(|_| DeviceGatewayError::Timeout {
                    operation: "result read",
                    timeout: self.io_timeout,
                })?
                .map_err(DeviceGatewayError::Receive)?;
            if n == 0 {
                break;
            }
            payload.extend_from_slice(&chunk[..n]);
        }

        Ok(payload)
    }
}
