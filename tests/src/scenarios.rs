use keygr_common::error::{FingerprintError, KeygenError};
use keygr_core::registry::Registry;
use keygr_core::{DispatchOptions, Outcome, match_and_dispatch, run_on};

use crate::fixtures::{lab_registry, wifi};

fn keys(result: &keygr_core::AggregatedResult) -> Vec<&str> {
    result.keys().collect()
}

/*************************************************************
                   Prefix matched networks
**************************************************************/

#[test]
fn wifi_prefix_selects_its_algorithm() {
    let registry = Registry::from_descriptors(vec![wifi()]);
    let result = run_on(&registry, "WIFI-1234AB", None, &DispatchOptions::default()).unwrap();

    assert_eq!(result.matched(), ["Wifi"]);
    assert_eq!(keys(&result), ["BA43211234AB", "ba4321"]);
    assert_eq!(result.outcome(), Outcome::Keys);
}

#[test]
fn failing_algorithm_does_not_hide_the_others() {
    let result = run_on(&lab_registry(), "WIFI-1234AB", None, &DispatchOptions::default()).unwrap();

    assert_eq!(result.matched(), ["WifiMac", "Wifi"]);
    assert_eq!(keys(&result), ["BA43211234AB", "ba4321"]);
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.failures()[0].algorithm, "WifiMac");
    assert_eq!(result.failures()[0].reason, KeygenError::MissingMac);
    assert_eq!(result.outcome(), Outcome::Keys);
}

#[test]
fn all_matches_contribute_in_registry_order() {
    let result = run_on(
        &lab_registry(),
        "WIFI-1234AB",
        Some("00:11:22:33:44:55"),
        &DispatchOptions::default(),
    )
    .unwrap();

    assert_eq!(result.matched(), ["WifiMac", "LabRange", "Wifi"]);
    let labelled: Vec<String> = result.labelled().collect();
    assert_eq!(
        labelled,
        [
            "WifiMac:001122334455",
            "LabRange:001122334455",
            "Wifi:BA43211234AB",
            "Wifi:ba4321",
        ]
    );
}

/*************************************************************
                     MAC only networks
**************************************************************/

#[test]
fn mac_only_selects_mac_range_algorithms() {
    let result = run_on(&lab_registry(), "", Some("00:11:22:33:44:55"), &DispatchOptions::default()).unwrap();

    assert_eq!(result.matched(), ["LabRange"]);
    assert_eq!(keys(&result), ["001122334455"]);
}

#[test]
fn builtin_catalog_has_no_mac_only_scheme() {
    let result = match_and_dispatch("", Some("00:11:22:33:44:55")).unwrap();

    assert!(result.matched().is_empty());
    assert_eq!(result.outcome(), Outcome::NoMatch);
}

#[test]
fn nothing_to_match_on_is_an_error() {
    assert_eq!(match_and_dispatch("", None).unwrap_err(), FingerprintError::Empty);
    assert_eq!(
        match_and_dispatch("", Some("00:11:22:33:44")).unwrap_err(),
        FingerprintError::Empty
    );
}

/*************************************************************
                   Outcomes without keys
**************************************************************/

#[test]
fn unknown_network_is_no_match() {
    let result = match_and_dispatch("UNKNOWN_NETWORK", None).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.failure_count(), 0);
    assert_eq!(result.outcome(), Outcome::NoMatch);
}

#[test]
fn mac_keyed_scheme_without_mac_is_all_failed() {
    let result = match_and_dispatch("EasyBox-0A1B2C", None).unwrap();

    assert_eq!(result.matched(), ["EasyBox"]);
    assert!(result.is_empty());
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.outcome(), Outcome::AllFailed);
}

#[test]
fn match_without_candidates_is_not_no_match() {
    let result = run_on(&lab_registry(), "SILENT", None, &DispatchOptions::default()).unwrap();

    assert_eq!(result.matched(), ["Silent"]);
    assert_eq!(result.failure_count(), 0);
    assert_eq!(result.outcome(), Outcome::NoCandidates);
}

/*************************************************************
                    Built-in vendor schemes
**************************************************************/

#[test]
fn verizon_uses_the_mac_when_known() {
    let without = match_and_dispatch("2FUSA", None).unwrap();
    assert_eq!(keys(&without), ["1801114D2FE", "1F90114D2FE"]);

    let with = match_and_dispatch("2FUSA", Some("00:1F:90:E2:7E:41")).unwrap();
    assert_eq!(keys(&with), ["1F90114D2FE"]);
}

#[test]
fn fixed_key_networks() {
    let andared = match_and_dispatch("Andared", None).unwrap();
    assert_eq!(
        keys(&andared),
        ["6b629f4c299371737494c61b5a101693a2d4e9e1f3e1320f3ebf9ae379cecf32"]
    );

    let conn = match_and_dispatch("conn-x1A2B3C", None).unwrap();
    assert_eq!(keys(&conn), ["1234567890123"]);
}

#[test]
fn eircom_derives_from_the_ssid_alone() {
    let result = match_and_dispatch("eircom2633 7520", None).unwrap();
    assert_eq!(keys(&result), ["29b2e9560b3a83a187ec5f2057"]);
}
