//! ONO cable routers (Spain), SSIDs like `P1xxxxxx0000x`.
//!
//! The WEP passphrase is the SSID with its two-digit counter incremented, so
//! `P123456700009` becomes `P123456700010`. Both key sizes a router may be
//! configured with are produced from it:
//!
//! * 64-bit: the common passphrase generator that folds the text into a
//!   32-bit seed and draws five bytes from a linear congruential generator.
//! * 128-bit: the first 13 bytes of `MD5` over the passphrase repeated to 64
//!   bytes.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const LCG_MULTIPLIER: u32 = 0x0003_43FD;
const LCG_INCREMENT: u32 = 0x0026_9EC3;
const WEP128_BLOCK: usize = 64;
const WEP128_LEN: usize = 13;
const COUNTER_START: usize = 11;

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Ono",
        "ONO (P1XXXXXX0000X)",
        Rule::ssid("[Pp]1[0-9]{6}0000[0-9]"),
        |fingerprint| Box::new(OnoKeygen::new(fingerprint)),
    )
}

pub struct OnoKeygen {
    ssid: String,
}

impl OnoKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
        }
    }

    fn passphrase(&self) -> Result<String, KeygenError> {
        let malformed = || KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: "P1 followed by 11 digits",
        };
        let prefix = self.ssid.get(..COUNTER_START).ok_or_else(malformed)?;
        let counter: u8 = self
            .ssid
            .get(COUNTER_START..)
            .filter(|counter| counter.len() == 2)
            .and_then(|counter| counter.parse().ok())
            .ok_or_else(malformed)?;
        Ok(format!("{prefix}{:02}", counter + 1))
    }
}

impl Keygen for OnoKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let passphrase = self.passphrase()?;
        Ok(vec![wep64(&passphrase), wep128(&passphrase)])
    }
}

fn wep64(passphrase: &str) -> String {
    let mut seed = [0u8; 4];
    for (idx, byte) in passphrase.bytes().enumerate() {
        seed[idx % 4] ^= byte;
    }

    let mut state = u32::from_le_bytes(seed);
    (0..5)
        .map(|_| {
            state = state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
            format!("{:02X}", (state >> 16) & 0xFF)
        })
        .collect()
}

fn wep128(passphrase: &str) -> String {
    let block: Vec<u8> = passphrase.bytes().cycle().take(WEP128_BLOCK).collect();
    let hash = md5::compute(&block);
    hex::encode_upper(&hash[..WEP128_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{fingerprint, keys};

    #[test]
    fn produces_both_wep_sizes() {
        assert_eq!(
            keys(&descriptor(), "P123456700003", None),
            ["93C4750711", "133C63A3EA72CFE4CFFBC4AE65"]
        );
    }

    #[test]
    fn nine_carries_into_the_counter() {
        let keygen = OnoKeygen::new(&fingerprint("P123456700009", None));
        assert_eq!(keygen.passphrase().unwrap(), "P123456700010");
        assert_eq!(
            keygen.generate().unwrap(),
            ["A0B696043B", "767985CF320CF84E67DDA25436"]
        );
    }

    #[test]
    fn passphrase_keeps_the_ssid_length() {
        for last in 0..=9 {
            let ssid = format!("P12345670000{last}");
            let keygen = OnoKeygen::new(&fingerprint(&ssid, None));
            assert_eq!(keygen.passphrase().unwrap().len(), ssid.len());
        }
    }

    #[test]
    fn short_ssid_is_malformed() {
        let keygen = OnoKeygen::new(&fingerprint("P1", None));
        assert!(matches!(keygen.passphrase(), Err(KeygenError::MalformedSsid { .. })));
    }
}
