//! Arcadyan routers sold as Vodafone / Arcor EasyBox.
//!
//! Every digit of the 9-digit WPA key is an XOR of nibbles taken from the last
//! two MAC octets and from the decimal rendering of those same octets.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use keygr_common::utils::hex::{digit_upper, nibbles};

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const ARCADYAN_OUIS: &[[u8; 3]] = &[
    [0x00, 0x12, 0xBF],
    [0x00, 0x1A, 0x2A],
    [0x00, 0x1D, 0x19],
    [0x00, 0x23, 0x08],
    [0x00, 0x26, 0x4D],
    [0x50, 0x7E, 0x5D],
    [0x1C, 0xC6, 0x3C],
    [0x74, 0x31, 0x70],
    [0x7C, 0x4F, 0xB5],
    [0x88, 0x25, 0x2C],
];

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "EasyBox",
        "Arcadyan EasyBox (Vodafone, Arcor)",
        Rule::All(vec![
            Rule::ssid("(Arcor|EasyBox|Vodafone)[- ][0-9a-fA-F]{6}"),
            Rule::OuiIfPresent(ARCADYAN_OUIS),
        ]),
        |fingerprint| Box::new(EasyBoxKeygen::new(fingerprint)),
    )
}

pub struct EasyBoxKeygen {
    mac: Option<MacAddress>,
}

impl EasyBoxKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            mac: fingerprint.mac(),
        }
    }
}

impl Keygen for EasyBoxKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.mac.ok_or(KeygenError::MissingMac)?;
        let [.., e, f] = mac.octets();
        let decimal = format!("{:05}", u16::from_be_bytes([e, f]));

        let m = nibbles(&mac.to_hex())
            .ok_or_else(|| KeygenError::UnsupportedMac(mac.to_string()))?;
        let s: Vec<u8> = decimal.bytes().map(|digit| digit - b'0').collect();

        let k1 = (s[1] + s[2] + m[10] + m[11]) & 0x0F;
        let k2 = (m[8] + m[9] + s[3] + s[4]) & 0x0F;

        let digits = [
            k1 ^ s[4],
            k2 ^ m[9],
            m[10] ^ s[4],
            k1 ^ s[3],
            k2 ^ m[10],
            m[11] ^ s[3],
            k1 ^ s[2],
            k2 ^ m[11],
            k1 ^ k2,
        ];
        Ok(vec![digits.iter().map(|&digit| digit_upper(digit)).collect()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{fingerprint, keys};

    #[test]
    fn derives_nine_digit_key() {
        let ssid = "EasyBox-0A1B2C";
        assert_eq!(keys(&descriptor(), ssid, Some("00:12:BF:01:23:45")), ["B3D047252"]);
        assert_eq!(keys(&descriptor(), ssid, Some("00:12:BF:FF:FF:FF")), ["D9AB9CD9E"]);
    }

    #[test]
    fn needs_mac() {
        let keygen = EasyBoxKeygen::new(&fingerprint("Vodafone-0A1B2C", None));
        assert_eq!(keygen.generate(), Err(KeygenError::MissingMac));
    }

    #[test]
    fn foreign_oui_is_not_matched() {
        let fingerprint = fingerprint("Arcor-0A1B2C", Some("00:11:22:33:44:55"));
        assert!(!descriptor().applies_to(&fingerprint));
    }
}
