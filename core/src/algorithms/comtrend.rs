//! Comtrend CT-5365 shipped by Movistar / Jazztel (Spain), `WLAN_xxxx`.
//!
//! The SSID keeps the last four MAC digits. The key is the first 20 hex digits
//! of `MD5("bcgbghgg" + MAC[0..8] + SSID tail + MAC)`.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;

use super::{CandidateSet, Keygen, ssid_tail};
use crate::registry::{AlgorithmDescriptor, Rule};

const MAGIC: &str = "bcgbghgg";
const COMTREND_OUIS: &[[u8; 3]] = &[[0x00, 0x1D, 0x20], [0x64, 0x68, 0x0C]];
const EXPECTED: &str = "'WLAN_' or 'JAZZTEL_' followed by 4 hex digits";

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Comtrend",
        "Comtrend CT-5365 (Movistar, Jazztel)",
        Rule::All(vec![
            Rule::ssid("(WLAN|JAZZTEL)_[0-9a-fA-F]{4}"),
            Rule::OuiIn(COMTREND_OUIS),
        ]),
        |fingerprint| Box::new(ComtrendKeygen::new(fingerprint)),
    )
}

pub struct ComtrendKeygen {
    ssid: String,
    mac: Option<MacAddress>,
}

impl ComtrendKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for ComtrendKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?.to_hex();
        let tail = ssid_tail(&self.ssid, 4, EXPECTED)?.to_ascii_uppercase();

        let input = format!("{MAGIC}{}{tail}{mac}", &mac[..8]);
        let mut key = format!("{:x}", md5::compute(input.as_bytes()));
        key.truncate(20);
        Ok(vec![key])
    }
}
