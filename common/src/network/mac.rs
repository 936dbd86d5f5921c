//! # MAC Address Model
//!
//! Parses and renders the hardware address half of a network fingerprint.
//!
//! Accepted text is exactly six two-digit hex octets separated by `:` or `-`
//! (case-insensitive, separators may be mixed). The canonical textual form is
//! uppercase and colon separated, e.g. `00:1F:90:E2:7E:41`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;

use crate::error::FingerprintError;
use crate::utils::hex;

const MAC_TEXT_LEN: usize = 17;
const MAC_MASK: u64 = 0xFFFF_FFFF_FFFF;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// A validated 6-octet hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(MacAddr);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr::new(a, b, c, d, e, f))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0.octets()
    }

    /// The manufacturer prefix (first three octets).
    pub fn oui(&self) -> [u8; 3] {
        let [a, b, c, ..] = self.octets();
        [a, b, c]
    }

    /// Uppercase hex without separators, e.g. `001F90E27E41`.
    pub fn to_hex(&self) -> String {
        self.octets().iter().map(|octet| format!("{octet:02X}")).collect()
    }

    /// The address as a 48-bit integer.
    pub fn as_u64(&self) -> u64 {
        self.octets()
            .iter()
            .fold(0u64, |acc, octet| (acc << 8) | u64::from(*octet))
    }

    /// Builds an address from the low 48 bits of `value`.
    pub fn from_u64(value: u64) -> Self {
        let bytes = (value & MAC_MASK).to_be_bytes();
        Self::new([bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]])
    }

    /// Adds `delta` to the address, wrapping inside the 48-bit space.
    pub fn offset(&self, delta: i64) -> Self {
        Self::from_u64(self.as_u64().wrapping_add_signed(delta))
    }

    pub fn inner(&self) -> MacAddr {
        self.0
    }
}

impl FromStr for MacAddress {
    type Err = FingerprintError;

    /// Parses `AA:BB:CC:DD:EE:FF`, `aa-bb-cc-dd-ee-ff` or any mix of the two.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FingerprintError::InvalidMac(s.to_string());
        let text = s.trim().as_bytes();

        if text.len() != MAC_TEXT_LEN {
            return Err(invalid());
        }

        let mut octets = [0u8; 6];
        for (idx, octet) in octets.iter_mut().enumerate() {
            let start = idx * 3;
            if idx > 0 && !matches!(text[start - 1], b':' | b'-') {
                return Err(invalid());
            }
            let high = hex::nibble(text[start]).ok_or_else(invalid)?;
            let low = hex::nibble(text[start + 1]).ok_or_else(invalid)?;
            *octet = (high << 4) | low;
        }

        Ok(Self::new(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac_addr: MacAddr) -> Self {
        Self(mac_addr)
    }
}

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// A database that fails to load is remembered as missing, lookups then
/// return `None`.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

/// Identify the vendor of a MAC address.
pub fn get_vendor(mac: MacAddress) -> Option<String> {
    let db = get_oui_db()?;
    match db.lookup_by_mac(&mac.inner().to_string()) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
