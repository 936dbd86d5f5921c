//! # Vendor Algorithms
//!
//! One module per default-key scheme. Every scheme implements [`Keygen`] and
//! exposes a `descriptor()` describing when it applies.
//!
//! Adding a scheme means adding a module and one line to [`catalog`]. The
//! position in that list is the scheme's position in every result.

use keygr_common::error::KeygenError;

use crate::registry::AlgorithmDescriptor;

mod belkin;
mod comtrend;
mod discus;
mod dlink;
mod easybox;
mod eircom;
mod fixed;
mod infostrada;
mod megared;
mod ono;
mod pbs;
mod pirelli;
mod sky;
mod tecom;
mod thomson;
mod verizon;

/// Candidates produced by one algorithm, in generation order.
pub type CandidateSet = Vec<String>;

/// A default-key scheme bound to one fingerprint.
pub trait Keygen {
    /// Derives every candidate the scheme allows for the bound fingerprint.
    ///
    /// Must be deterministic and free of I/O.
    fn generate(&self) -> Result<CandidateSet, KeygenError>;
}

/// The built-in schemes, in registry order.
pub(crate) fn catalog() -> Vec<AlgorithmDescriptor> {
    vec![
        thomson::descriptor(),
        discus::descriptor(),
        eircom::descriptor(),
        verizon::descriptor(),
        tecom::descriptor(),
        infostrada::descriptor(),
        pirelli::descriptor(),
        sky::descriptor(),
        easybox::descriptor(),
        dlink::descriptor(),
        pbs::descriptor(),
        comtrend::descriptor(),
        megared::descriptor(),
        fixed::conn_descriptor(),
        fixed::andared_descriptor(),
        ono::descriptor(),
        belkin::descriptor(),
    ]
}

/// The last `len` characters of the SSID, or a malformed SSID error.
fn ssid_tail<'a>(
    ssid: &'a str,
    len: usize,
    expected: &'static str,
) -> Result<&'a str, KeygenError> {
    keygr_common::utils::hex::tail(ssid, len).ok_or_else(|| KeygenError::MalformedSsid {
        ssid: ssid.to_string(),
        expected,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use keygr_common::network::fingerprint::NetworkFingerprint;

    use crate::registry::AlgorithmDescriptor;

    pub fn fingerprint(ssid: &str, mac: Option<&str>) -> NetworkFingerprint {
        NetworkFingerprint::new(ssid, mac.map(|m| m.parse().unwrap())).unwrap()
    }

    /// Matches and runs `descriptor` on the given network, asserting it applies.
    pub fn keys(descriptor: &AlgorithmDescriptor, ssid: &str, mac: Option<&str>) -> Vec<String> {
        let fingerprint = fingerprint(ssid, mac);
        assert!(descriptor.applies_to(&fingerprint), "{} rejected {ssid}", descriptor.id());
        descriptor.instantiate(&fingerprint).generate().unwrap()
    }
}
