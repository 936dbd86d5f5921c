//! PBS routers (Austria), `PBS-xxxxxx`.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use sha2::{Digest, Sha256};

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const SALT: [u8; 32] = [
    0x54, 0x45, 0x4F, 0x74, 0x65, 0x6C, 0xB6, 0xD9, 0x86, 0x96, 0x8D, 0x34, 0x45, 0xD2, 0x3B, 0x15,
    0xCA, 0xAF, 0x12, 0x84, 0x02, 0xAC, 0x56, 0x00, 0x05, 0xCE, 0x20, 0x75, 0x91, 0x3F, 0xDC, 0xE8,
];
const LOOKUP: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const KEY_LEN: usize = 13;

/// The key is computed from the LAN MAC, five below the broadcast BSSID.
const BSSID_TO_LAN: i64 = -5;

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "PBS",
        "PBS (Austria)",
        Rule::ssid("PBS-[0-9a-fA-F]{6}"),
        |fingerprint| Box::new(PbsKeygen::new(fingerprint)),
    )
}

pub struct PbsKeygen {
    mac: Option<MacAddress>,
}

impl PbsKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for PbsKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        let lan = mac.offset(BSSID_TO_LAN);

        let mut hasher = Sha256::new();
        hasher.update(SALT);
        hasher.update(lan.octets());
        let hash = hasher.finalize();

        let key: String = hash[..KEY_LEN]
            .iter()
            .map(|&byte| char::from(LOOKUP[usize::from(byte) % LOOKUP.len()]))
            .collect();
        Ok(vec![key])
    }
}
