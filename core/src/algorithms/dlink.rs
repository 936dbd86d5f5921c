//! D-Link DSL-2640B / DSL-2740B.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use keygr_common::utils::hex::nibbles;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const TABLE: &[u8; 16] = b"XrqaHNpdSYw86215";

/// Which MAC hex digit feeds each key position.
const POSITIONS: [usize; 20] = [11, 0, 10, 1, 9, 2, 8, 3, 7, 4, 6, 5, 1, 6, 8, 9, 11, 2, 4, 10];

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Dlink",
        "D-Link DSL-2640B, DSL-2740B",
        Rule::ssid("DLink-[0-9a-fA-F]{6}"),
        |fingerprint| Box::new(DlinkKeygen::new(fingerprint)),
    )
}

pub struct DlinkKeygen {
    mac: Option<MacAddress>,
}

impl DlinkKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for DlinkKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        let digits = nibbles(&mac.to_hex())
            .ok_or_else(|| KeygenError::UnsupportedMac(mac.to_string()))?;

        let key: String = POSITIONS
            .iter()
            .map(|&pos| char::from(TABLE[usize::from(digits[pos])]))
            .collect();
        Ok(vec![key])
    }
}
