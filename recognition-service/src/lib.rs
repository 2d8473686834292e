//! Recognition flows for the medical kiosk.
//!
//! Wraps the raw board hand-off ([`device_gateway`]) with what the kiosk
//! actually needs per patient interaction: staging the captured file under
//! a predictable name, running the hand-off, and cleaning the transcript
//! before it reaches the consultation layer.

pub mod config;
pub mod error;
pub mod normalize;
pub mod service;
pub mod staging;
pub mod transport;
pub mod types;

pub use config::*;
pub use error::*;
pub use normalize::*;
pub use service::*;
pub use staging::*;
pub use transport::*;
pub use types::*;
