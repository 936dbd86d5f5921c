//! Megared (Mexico).

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Megared",
        "Megared",
        Rule::ssid("Megared[0-9a-fA-F]{4}"),
        |fingerprint| Box::new(MegaredKeygen::new(fingerprint)),
    )
}

pub struct MegaredKeygen {
    mac: Option<MacAddress>,
}

impl MegaredKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for MegaredKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        // key is the MAC without its first octet
        Ok(vec![mac.to_hex()[2..].to_string()])
    }
}
