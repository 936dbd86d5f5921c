use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_core::algorithms::{CandidateSet, Keygen};
use keygr_core::registry::{AlgorithmDescriptor, Registry, Rule};

/*************************************************************
                     Keygens for testing
**************************************************************/

/// Reverses the hex tail of a `WIFI-XXXXXX` SSID and derives two keys from it.
pub struct WifiKeygen {
    ssid: String,
}

impl Keygen for WifiKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let tail = self.ssid.strip_prefix("WIFI-").ok_or_else(|| KeygenError::MalformedSsid {
            ssid: self.ssid.clone(),
            expected: "WIFI- followed by six hex digits",
        })?;
        let reversed: String = tail.chars().rev().collect();
        Ok(vec![format!("{reversed}{tail}"), reversed.to_lowercase()])
    }
}

/// Uses the MAC as the key, so it fails without one.
pub struct MacKeygen {
    fingerprint: NetworkFingerprint,
}

impl Keygen for MacKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        let mac = self.fingerprint.mac().ok_or(KeygenError::MissingMac)?;
        Ok(vec![mac.to_hex()])
    }
}

pub struct EmptyKeygen;

impl Keygen for EmptyKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        Ok(Vec::new())
    }
}

/*************************************************************
                    Registries for testing
**************************************************************/

pub const LAB_OUI: [u8; 3] = [0x00, 0x11, 0x22];

pub fn wifi() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Wifi",
        "Generic WIFI- router",
        Rule::ssid("WIFI-[0-9A-F]{6}"),
        |fingerprint| {
            Box::new(WifiKeygen {
                ssid: fingerprint.ssid().to_string(),
            })
        },
    )
}

/// Claims every `WIFI-` network but needs the MAC to derive anything.
pub fn wifi_mac() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "WifiMac",
        "Generic WIFI- router, MAC keyed",
        Rule::All(vec![Rule::ssid("WIFI-[0-9A-F]{6}"), Rule::OuiIfPresent(&[LAB_OUI])]),
        |fingerprint| {
            Box::new(MacKeygen {
                fingerprint: fingerprint.clone(),
            })
        },
    )
}

pub fn lab_range() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "LabRange",
        "Lab MAC range",
        Rule::OuiIn(&[LAB_OUI]),
        |fingerprint| {
            Box::new(MacKeygen {
                fingerprint: fingerprint.clone(),
            })
        },
    )
}

pub fn silent() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Silent",
        "Matches but yields nothing",
        Rule::SsidEquals("SILENT"),
        |_| Box::new(EmptyKeygen),
    )
}

pub fn lab_registry() -> Registry {
    Registry::from_descriptors(vec![wifi_mac(), lab_range(), wifi(), silent()])
}
