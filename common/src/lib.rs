//! Shared building blocks for `keygr`.
//!
//! Holds everything both the engine and the front end need to agree on: the
//! [`network::fingerprint::NetworkFingerprint`] value, MAC address parsing, the
//! error taxonomy, the run [`config::Config`] and the status logging macros.

pub mod config;
pub mod error;
pub mod macros;
pub mod network;
pub mod utils;

#[doc(hidden)]
pub use tracing as __tracing;
