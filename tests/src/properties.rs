use keygr_common::network::mac::MacAddress;
use keygr_core::registry::Registry;
use keygr_core::{DispatchOptions, FingerprintMatcher, match_and_dispatch, match_and_dispatch_with, run_on};

use crate::fixtures::lab_registry;

const SAMPLES: &[(&str, Option<&str>)] = &[
    ("2FUSA", Some("00:1F:90:E2:7E:41")),
    ("Discus--DA1B2C", None),
    ("TECOM-AH4021-3A5B7C", None),
    ("FASTWEB-1-00193EA1B2C3", None),
    ("SKY12345", Some("C4:3D:C7:12:34:56")),
    ("EasyBox-0A1B2C", Some("00:12:BF:01:23:45")),
    ("Belkin.5F3A", Some("94:44:52:12:34:56")),
    ("P123456700003", None),
    ("UNKNOWN_NETWORK", None),
];

#[test]
fn dispatch_is_deterministic() {
    for (ssid, mac) in SAMPLES {
        let first = match_and_dispatch(ssid, *mac).unwrap();
        let second = match_and_dispatch(ssid, *mac).unwrap();
        assert_eq!(first, second, "{ssid} changed between runs");
    }
}

#[test]
fn parallel_dispatch_keeps_sequential_order() {
    let parallel = DispatchOptions { parallel: true };
    for (ssid, mac) in SAMPLES {
        let sequential = match_and_dispatch(ssid, *mac).unwrap();
        let concurrent = match_and_dispatch_with(ssid, *mac, &parallel).unwrap();
        assert_eq!(sequential, concurrent, "{ssid} differs when run in parallel");
    }

    let sequential = run_on(&lab_registry(), "WIFI-1234AB", Some("00:11:22:33:44:55"), &DispatchOptions::default());
    let concurrent = run_on(&lab_registry(), "WIFI-1234AB", Some("00:11:22:33:44:55"), &parallel);
    assert_eq!(sequential, concurrent);
}

#[test]
fn matches_are_a_registry_ordered_subsequence() {
    let registry = Registry::builtin();
    let ids: Vec<&str> = registry.list().iter().map(|d| d.id()).collect();

    for (ssid, mac) in SAMPLES {
        let result = match_and_dispatch(ssid, *mac).unwrap();
        let positions: Vec<usize> = result
            .matched()
            .iter()
            .map(|id| ids.iter().position(|known| known == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{ssid} matched out of order");
    }
}

#[test]
fn every_match_satisfies_its_rule() {
    let registry = lab_registry();
    let matcher = FingerprintMatcher::new(&registry);
    let fingerprint = keygr_common::network::fingerprint::NetworkFingerprint::new(
        "WIFI-00FF00",
        Some("00:11:22:AA:BB:CC".parse().unwrap()),
    )
    .unwrap();

    let matched = matcher.matches(&fingerprint);
    assert_eq!(matched.len(), 3);
    assert!(matched.iter().all(|d| d.rule().evaluate(&fingerprint)));
}

#[test]
fn mac_spelling_does_not_change_results() {
    let canonical = match_and_dispatch("2FUSA", Some("00:1F:90:E2:7E:41")).unwrap();
    for spelling in ["00-1f-90-e2-7e-41", "00:1f:90:E2-7E-41", " 00:1F:90:E2:7E:41 "] {
        let result = match_and_dispatch("2FUSA", Some(spelling)).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), canonical.keys().collect::<Vec<_>>());
        assert_eq!(result.mac(), canonical.mac());
    }
}

#[test]
fn canonical_mac_text_round_trips() {
    let mac: MacAddress = "a8-39-44-0f-1e-2d".parse().unwrap();
    let again: MacAddress = mac.to_string().parse().unwrap();
    assert_eq!(mac, again);
    assert_eq!(again.to_string(), "A8:39:44:0F:1E:2D");
}

#[test]
fn malformed_mac_falls_back_to_ssid_matching() {
    let reference = match_and_dispatch("2FUSA", None).unwrap();

    for bad in ["00:1F:90:E2:7E", "00:1F:90:E2:7E:4G", "001F90E27E41", "00:1F:90:E2:7E:41:00"] {
        let result = match_and_dispatch("2FUSA", Some(bad)).unwrap();
        assert_eq!(result.discarded_mac(), Some(bad));
        assert_eq!(result.mac(), None);
        assert_eq!(result.keys().collect::<Vec<_>>(), reference.keys().collect::<Vec<_>>());
    }
}
