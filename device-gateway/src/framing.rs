//! Length-prefixed frames for firmware builds that support them.
//!
//! One frame is a u32 big-endian payload length followed by the payload.
//! With frames the end of a message no longer depends on the peer closing
//! the connection, so sequential requests can reuse one connection.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{DeviceGatewayError, Result};

/// Upper bound on a single frame body. Captured photos and audio clips
/// from the kiosk stay well under this.
pub const MAX_FRAME_LEN: u32 = 32 * 1024 * 1024;

/// Write one frame: 4-byte big-endian length, then the payload.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let len = u32::try_from(payload.len())
        .ok()
        .filter(|len| *len <= MAX_FRAME_LEN)
        .ok_or_else(|| {
            DeviceGatewayError::Frame(format!(
                "payload of {} bytes exceeds the {} byte frame limit",
                payload.len(),
                MAX_FRAME_LEN
            ))
        })?;

    writer
        .write_all(&len.to_be_bytes())
        .await
        .map_err(DeviceGatewayError::Transfer)?;
    writer
        .write_all(payload)
        .await
        .map_err(DeviceGatewayError::Transfer)?;
    writer.flush().await.map_err(DeviceGatewayError::Transfer)?;

    Ok(())
}

/// Read one frame, rejecting announced lengths over [`MAX_FRAME_LEN`]
/// before allocating.
pub async fn read_frame<R>(reader: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    reader
        .read_exact(&mut len_buf)
        .await
        .map_err(DeviceGatewayError::Receive)?;

    let len = u32::from_be_bytes(len_buf);
    if len > MAX_FRAME_LEN {
        return Err(DeviceGatewayError::Frame(format!(
            "peer announced a {len} byte frame, limit is {MAX_FRAME_LEN}"
        )));
    }

    let mut payload = vec![0u8; len as usize];
    reader
        .read_exact(&mut payload)
        .await
        .map_err(DeviceGatewayError::Receive)?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn frame_round_trip() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        assert_ok!(write_frame(&mut client, "发热，头痛".as_bytes()).await);
        let payload = assert_ok!(read_frame(&mut server).await);

        assert_eq!(payload, "发热，头痛".as_bytes());
    }

    #[tokio::test]
    async fn empty_frame_round_trip() {
        let (mut client, mut server) = tokio::io::duplex(64);

        assert_ok!(write_frame(&mut client, b"").await);
        let payload = assert_ok!(read_frame(&mut server).await);

        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn oversized_announcement_is_rejected_before_allocation() {
        let (mut client, mut server) = tokio::io::duplex(64);

        let bogus = (MAX_FRAME_LEN + 1).to_be_bytes();
        tokio::io::AsyncWriteExt::write_all(&mut client, &bogus)
            .await
            .unwrap();

        let err = read_frame(&mut server).await.unwrap_err();
        assert!(matches!(err, DeviceGatewayError::Frame(_)));
    }
}
