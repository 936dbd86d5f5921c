//! Tecom AH4021 / AH4222.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use sha1::{Digest, Sha1};

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Tecom",
        "Tecom AH4021, AH4222",
        Rule::ssid("TECOM-AH4(021|222)-[0-9a-zA-Z]{6}"),
        |fingerprint| Box::new(TecomKeygen::new(fingerprint)),
    )
}

pub struct TecomKeygen {
    ssid: String,
}

impl TecomKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
        }
    }
}

impl Keygen for TecomKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mut key = hex::encode(Sha1::digest(self.ssid.as_bytes()));
        key.truncate(26);
        Ok(vec![key])
    }
}
