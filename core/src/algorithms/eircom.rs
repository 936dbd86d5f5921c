//! Eircom Netopia (Ireland).
//!
//! The SSID encodes the last three MAC octets in octal, XORed with `0xFCC`.
//! The key is the SHA-1 of the MAC tail (plus `0x01000000`) spelled out digit
//! by digit in English, followed by a fixed lyric.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use sha1::{Digest, Sha1};

use super::{CandidateSet, Keygen, ssid_tail};
use crate::registry::{AlgorithmDescriptor, Rule};

const NETOPIA_OUI: [u8; 3] = [0x00, 0x0F, 0xCC];
const SSID_MASK: u32 = 0x000FCC;
const MAC_OFFSET: u32 = 0x0100_0000;
const LYRIC: &str = "Although your world wonders me, ";
const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const EXPECTED: &str = "'eircom' followed by 8 octal digits";

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Eircom",
        "Eircom Netopia",
        Rule::ssid("[eE]ircom[0-7]{4} ?[0-7]{4}"),
        |fingerprint| Box::new(EircomKeygen::new(fingerprint)),
    )
}

pub struct EircomKeygen {
    ssid: String,
    mac: Option<MacAddress>,
}

impl EircomKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
            mac: fingerprint.mac(),
        }
    }

    /// Recovers the router MAC from the octal SSID suffix.
    fn mac_from_ssid(&self) -> Result<MacAddress, KeygenError> {
        let compact: String = self.ssid.chars().filter(|c| *c != ' ').collect();
        let octal = ssid_tail(&compact, 8, EXPECTED)?;
        let value = u32::from_str_radix(octal, 8).map_err(|_| KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: EXPECTED,
        })?;

        let [_, a, b, c] = (value ^ SSID_MASK).to_be_bytes();
        let [x, y, z] = NETOPIA_OUI;
        Ok(MacAddress::new([x, y, z, a, b, c]))
    }
}

impl Keygen for EircomKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = match self.mac {
            Some(mac) => mac,
            None => self.mac_from_ssid()?,
        };

        let [.., d, e, f] = mac.octets();
        let serial = u32::from_be_bytes([0, d, e, f]) + MAC_OFFSET;
        let mut input = spell_digits(serial);
        input.push_str(LYRIC);

        let digest = Sha1::digest(input.as_bytes());
        let mut key = hex::encode(digest);
        key.truncate(26);
        Ok(vec![key])
    }
}

fn spell_digits(value: u32) -> String {
    value
        .to_string()
        .bytes()
        .map(|digit| DIGIT_WORDS[usize::from(digit - b'0')])
        .collect()
}
