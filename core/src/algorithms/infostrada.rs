//! Infostrada (Italy).

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Infostrada",
        "Infostrada WiFi",
        Rule::ssid("InfostradaWiFi-[0-9a-zA-Z]{6}"),
        |fingerprint| Box::new(InfostradaKeygen::new(fingerprint)),
    )
}

pub struct InfostradaKeygen {
    mac: Option<MacAddress>,
}

impl InfostradaKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for InfostradaKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        Ok(vec![format!("2{}", mac.to_hex())])
    }
}
