//! Verizon FiOS (Actiontec).

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const VERIZON_OUIS: &[[u8; 3]] = &[
    [0x00, 0x1F, 0x90],
    [0xA8, 0x39, 0x44],
    [0x00, 0x18, 0x01],
    [0x00, 0x20, 0xE0],
    [0x00, 0x0F, 0xB3],
    [0x00, 0x1E, 0xA7],
    [0x00, 0x15, 0x05],
    [0x00, 0x24, 0x7B],
    [0x00, 0x26, 0x62],
    [0x00, 0x26, 0xB8],
];

/// Octets 2 and 3 of the two most common Actiontec prefixes.
const FALLBACK_PREFIXES: [&str; 2] = ["1801", "1F90"];

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Verizon",
        "Verizon FiOS",
        Rule::All(vec![Rule::ssid("[0-9A-Z]{5}"), Rule::OuiIfPresent(VERIZON_OUIS)]),
        |fingerprint| Box::new(VerizonKeygen::new(fingerprint)),
    )
}

pub struct VerizonKeygen {
    ssid: String,
    mac: Option<MacAddress>,
}

impl VerizonKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for VerizonKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        if self.ssid.len() != 5 {
            return Err(KeygenError::MalformedSsid {
                ssid: self.ssid.clone(),
                expected: "5 characters",
            });
        }

        let reversed: String = self.ssid.chars().rev().collect();
        let value = u32::from_str_radix(&reversed, 36).map_err(|_| KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: "5 base-36 characters",
        })?;
        let ssid_key = format!("{value:06X}");

        match self.mac {
            Some(mac) => {
                let [_, b, c, ..] = mac.octets();
                Ok(vec![format!("{b:02X}{c:02X}{ssid_key}")])
            }
            None => Ok(FALLBACK_PREFIXES
                .iter()
                .map(|prefix| format!("{prefix}{ssid_key}"))
                .collect()),
        }
    }
}
