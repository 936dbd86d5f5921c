//! # Network Fingerprint
//!
//! The broadcast identity of an access point: its SSID and, when known, its
//! MAC address. Every vendor algorithm is matched and run against one of these.

use crate::error::FingerprintError;
use crate::network::mac::MacAddress;

/// Immutable (SSID, MAC) pair.
///
/// At least one discriminator is always present: the SSID may only be empty
/// when a MAC address is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkFingerprint {
    ssid: String,
    mac: Option<MacAddress>,
}

impl NetworkFingerprint {
    pub fn new(ssid: impl Into<String>, mac: Option<MacAddress>) -> Result<Self, FingerprintError> {
        let ssid: String = ssid.into();
        if ssid.is_empty() && mac.is_none() {
            return Err(FingerprintError::Empty);
        }
        Ok(Self { ssid, mac })
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn mac(&self) -> Option<MacAddress> {
        self.mac
    }

    pub fn has_ssid(&self) -> bool {
        !self.ssid.is_empty()
    }
}
