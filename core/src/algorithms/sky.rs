//! Sky V1 routers (UK), `SKYxxxxx`.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const SKY_OUIS: &[[u8; 3]] = &[
    [0xC4, 0x3D, 0xC7],
    [0xE0, 0x46, 0x9A],
    [0xE0, 0x91, 0xF5],
    [0x00, 0x09, 0x5B],
    [0x00, 0x0F, 0xB5],
    [0x00, 0x14, 0x6C],
    [0x00, 0x18, 0x4D],
    [0x00, 0x26, 0xF2],
    [0xC0, 0x3F, 0x0E],
    [0x30, 0x46, 0x9A],
    [0x00, 0x1B, 0x2F],
    [0xA0, 0x21, 0xB7],
    [0x00, 0x1E, 0x2A],
    [0x00, 0x1F, 0x33],
    [0x00, 0x22, 0x3F],
    [0x00, 0x24, 0xB2],
];

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "SkyV1",
        "Sky V1 (Netgear DG934G, Sagem F@st 2504)",
        Rule::All(vec![Rule::ssid("SKY[0-9]{5}"), Rule::OuiIfPresent(SKY_OUIS)]),
        |fingerprint| Box::new(SkyV1Keygen::new(fingerprint)),
    )
}

pub struct SkyV1Keygen {
    mac: Option<MacAddress>,
}

impl SkyV1Keygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for SkyV1Keygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        let hash = md5::compute(mac.to_hex().as_bytes());

        let key: String = (1..16)
            .step_by(2)
            .map(|idx| char::from(ALPHABET[usize::from(hash[idx]) % ALPHABET.len()]))
            .collect();
        Ok(vec![key])
    }
}
