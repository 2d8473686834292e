//! Client for the kiosk's remote recognition board.
//!
//! The board OCRs captured documents and transcribes recorded speech. Its
//! firmware speaks a fixed two-socket convention: the kiosk pushes a whole
//! file to one port, then receives the whole UTF-8 result over a second
//! connection that the board opens back to a fixed result port. In this raw
//! mode peer close is the only end-of-message signal on either socket.
//!
//! [`DeviceTransferClient::exchange`] runs one full hand-off. The push and
//! receive halves are exposed separately for callers that stage their own
//! sequencing. Firmware builds that understand length-prefixed payloads can
//! use [`DeviceTransferClient::exchange_framed`] instead and keep the whole
//! round trip on a single connection.

pub mod config;
pub mod error;
pub mod framing;
pub mod transfer;

pub use config::*;
pub use error::*;
pub use transfer::*;
