//! Pirelli Discus routers shipped by Fastweb (Italy).
//!
//! The 12 hex digits after `FASTWEB-1-` are the router MAC. The WEP key is
//! five 5-bit groups taken from `MD5(mac || salt)`.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;

use super::{CandidateSet, Keygen, ssid_tail};
use crate::registry::{AlgorithmDescriptor, Rule};

const SALT: [u8; 20] = [
    0x22, 0x33, 0x11, 0x34, 0x02, 0x81, 0xFA, 0x22, 0x11, 0x41, 0x68, 0x11, 0x12, 0x01, 0x05, 0x22,
    0x71, 0x42, 0x10, 0x66,
];
const EXPECTED: &str = "'FASTWEB-1-' followed by 12 hex digits";

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Pirelli",
        "Pirelli Discus (Fastweb)",
        Rule::ssid(
            "FASTWEB-1-(000827|0013C8|0017C2|00193E|001CA2|001D8B|002233|00238E|002553|00A02F|080018|3039F2|38229D|6487D7)[0-9A-Fa-f]{6}",
        ),
        |fingerprint| Box::new(PirelliKeygen::new(fingerprint)),
    )
}

pub struct PirelliKeygen {
    ssid: String,
}

impl PirelliKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
        }
    }
}

impl Keygen for PirelliKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let malformed = || KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: EXPECTED,
        };
        let mut mac = [0u8; 6];
        hex::decode_to_slice(ssid_tail(&self.ssid, 12, EXPECTED)?, &mut mac)
            .map_err(|_| malformed())?;

        let mut input = Vec::with_capacity(mac.len() + SALT.len());
        input.extend_from_slice(&mac);
        input.extend_from_slice(&SALT);
        let hash = md5::compute(&input);

        let groups = [
            hash[0] >> 3,
            ((hash[0] & 0x07) << 2) | (hash[1] >> 6),
            (hash[1] & 0x3F) >> 1,
            ((hash[1] & 0x01) << 4) | (hash[2] >> 4),
            ((hash[2] & 0x0F) << 1) | (hash[3] >> 7),
        ];

        let key: String = groups
            .iter()
            .map(|&group| if group >= 0x0A { group + 0x57 } else { group })
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Ok(vec![key])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{fingerprint, keys};

    #[test]
    fn derives_wep_key() {
        assert_eq!(keys(&descriptor(), "FASTWEB-1-00193EA1B2C3", None), ["6b64756b04"]);
    }

    #[test]
    fn unknown_oui_is_not_matched() {
        assert!(!descriptor().applies_to(&fingerprint("FASTWEB-1-112233A1B2C3", None)));
    }
}
