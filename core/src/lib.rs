//! # keygr core
//!
//! Identifies the default-key scheme of a wireless router from its broadcast
//! identity and reproduces the keys that scheme produces.
//!
//! The engine has two stages:
//!
//! * **[`matcher`]**: maps an (SSID, MAC) fingerprint to the vendor algorithms
//!   in the [`registry`] that could apply.
//! * **[`dispatch`]**: runs every matched algorithm, isolating failures, and
//!   merges their candidates in registry order.
//!
//! Front ends only need [`match_and_dispatch`] and [`list_algorithms`].

pub mod algorithms;
pub mod dispatch;
pub mod matcher;
pub mod registry;

use keygr_common::error::FingerprintError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use tracing::debug;

pub use dispatch::{AggregatedResult, Candidate, DispatchAggregator, DispatchOptions, Failure, Outcome};
pub use matcher::FingerprintMatcher;
pub use registry::{AlgorithmDescriptor, Registry};

/// Matches `ssid`/`mac` against the built-in catalog and runs every match.
///
/// A malformed `mac` is dropped (see [`AggregatedResult::discarded_mac`]) and
/// matching continues on the SSID alone. The only error is an empty
/// fingerprint: no SSID and no usable MAC.
pub fn match_and_dispatch(ssid: &str, mac: Option<&str>) -> Result<AggregatedResult, FingerprintError> {
    match_and_dispatch_with(ssid, mac, &DispatchOptions::default())
}

pub fn match_and_dispatch_with(
    ssid: &str,
    mac: Option<&str>,
    options: &DispatchOptions,
) -> Result<AggregatedResult, FingerprintError> {
    run_on(Registry::builtin(), ssid, mac, options)
}

/// Same as [`match_and_dispatch_with`] against an explicit registry.
pub fn run_on(
    registry: &Registry,
    ssid: &str,
    mac: Option<&str>,
    options: &DispatchOptions,
) -> Result<AggregatedResult, FingerprintError> {
    let (mac, discarded_mac) = parse_mac(mac);
    let fingerprint = NetworkFingerprint::new(ssid, mac)?;

    let matches = FingerprintMatcher::new(registry).matches(&fingerprint);
    let mut result = DispatchAggregator::new(*options).run(&matches, &fingerprint);
    result.set_discarded_mac(discarded_mac);
    Ok(result)
}

/// Every built-in algorithm, in registry order.
pub fn list_algorithms() -> &'static [AlgorithmDescriptor] {
    Registry::builtin().list()
}

/// Parses optional MAC text, returning the text instead when it is malformed.
fn parse_mac(mac: Option<&str>) -> (Option<MacAddress>, Option<String>) {
    let Some(text) = mac.map(str::trim).filter(|text| !text.is_empty()) else {
        return (None, None);
    };

    match text.parse::<MacAddress>() {
        Ok(mac) => (Some(mac), None),
        Err(e) => {
            debug!("{e}, matching on the SSID only");
            (None, Some(text.to_string()))
        }
    }
}
