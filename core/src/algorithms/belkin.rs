//! Belkin routers, `Belkin.xxxx` / `belkin.xxx`.
//!
//! The 8 character key maps the last 8 hex digits of a MAC through a
//! substitution charset, reading the digits in one of several fixed orders.
//! Depending on the model that MAC is the BSSID or the WAN MAC (BSSID + 1),
//! and the order is not recoverable from the broadcast data, so every
//! combination is a candidate.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use keygr_common::utils::hex::nibbles;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const BELKIN_OUIS: &[[u8; 3]] = &[[0x94, 0x44, 0x52], [0x08, 0x86, 0x3B], [0xEC, 0x1A, 0x59]];

const UPPER_CHARSET: &[u8; 16] = b"024613578ACE9BDF";
const LOWER_CHARSET: &[u8; 16] = b"944626378ace9bdf";

/// 1-based positions into the last 8 MAC digits.
const ORDERS: [[usize; 8]; 4] = [
    [6, 2, 3, 8, 5, 1, 7, 4],
    [1, 2, 3, 8, 5, 1, 7, 4],
    [1, 2, 3, 8, 5, 6, 7, 4],
    [6, 2, 3, 8, 5, 6, 7, 4],
];

/// WAN MAC first, then the BSSID itself.
const MAC_OFFSETS: [i64; 2] = [1, 0];

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Belkin",
        "Belkin F5D8235, F7D, F9K",
        Rule::All(vec![
            Rule::ssid("[Bb]elkin[._][0-9a-fA-F]{3,6}"),
            Rule::OuiIfPresent(BELKIN_OUIS),
        ]),
        |fingerprint| Box::new(BelkinKeygen::new(fingerprint)),
    )
}

pub struct BelkinKeygen {
    ssid: String,
    mac: Option<MacAddress>,
}

impl BelkinKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
            mac: fingerprint.mac(),
        }
    }

    fn charset(&self) -> &'static [u8; 16] {
        if self.ssid.starts_with('B') {
            UPPER_CHARSET
        } else {
            LOWER_CHARSET
        }
    }
}

impl Keygen for BelkinKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        let charset = self.charset();

        let mut keys = CandidateSet::with_capacity(MAC_OFFSETS.len() * ORDERS.len());
        for offset in MAC_OFFSETS {
            let hex = mac.offset(offset).to_hex();
            let digits = nibbles(&hex[4..])
                .ok_or_else(|| KeygenError::UnsupportedMac(mac.to_string()))?;

            for order in &ORDERS {
                let key: String = order
                    .iter()
                    .map(|&pos| char::from(charset[usize::from(digits[pos - 1])]))
                    .collect();
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
