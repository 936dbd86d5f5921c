//! Discus DVG-5402SP (Portugal).

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;

use super::{CandidateSet, Keygen, ssid_tail};
use crate::registry::{AlgorithmDescriptor, Rule};

const SSID_SEED: u32 = 0xD0EC31;
const EXPECTED: &str = "'Discus--' followed by 6 hex digits";

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Discus",
        "Discus DVG-5402SP",
        Rule::ssid("Discus--?[0-9a-fA-F]{6}"),
        |fingerprint| Box::new(DiscusKeygen::new(fingerprint)),
    )
}

pub struct DiscusKeygen {
    ssid: String,
}

impl DiscusKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
        }
    }
}

impl Keygen for DiscusKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let suffix = ssid_tail(&self.ssid, 6, EXPECTED)?;
        let value = u32::from_str_radix(suffix, 16).map_err(|_| KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: EXPECTED,
        })?;

        let offset = value.checked_sub(SSID_SEED).ok_or_else(|| {
            KeygenError::Precondition(format!("SSID value {value:06X} is below the vendor seed"))
        })?;

        Ok(vec![format!("YW0{}", offset >> 2)])
    }
}
