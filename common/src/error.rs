//! # Error Taxonomy
//!
//! Two families of errors cross crate boundaries:
//!
//! * [`FingerprintError`]: the (SSID, MAC) input itself is unusable.
//! * [`KeygenError`]: one vendor algorithm could not derive candidates for a
//!   fingerprint it was matched against. These never abort a whole run.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// MAC text is not six colon or hyphen separated hex pairs.
    #[error("invalid MAC address '{0}': expected six hex octet pairs separated by ':' or '-'")]
    InvalidMac(String),

    /// Neither an SSID nor a MAC address was supplied.
    #[error("a network needs at least an SSID or a MAC address")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeygenError {
    #[error("the MAC address is required by this algorithm")]
    MissingMac,

    #[error("SSID '{ssid}' does not fit this scheme, expected {expected}")]
    MalformedSsid { ssid: String, expected: &'static str },

    #[error("derivation precondition violated: {0}")]
    Precondition(String),

    #[error("MAC address {0} is outside the range this scheme supports")]
    UnsupportedMac(String),
}
