use std::process::ExitCode;

use colored::*;
use keygr_common::config::Config;
use keygr_common::error::FingerprintError;
use keygr_common::{error, success, warn};
use keygr_core::{AggregatedResult, DispatchOptions, Outcome, match_and_dispatch_with};

use crate::terminal::{colors, format, print, spinner};

/// How a `calc` run is reported, and the exit code it ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Keys,
    Unsupported,
    NoKeys,
}

impl Verdict {
    /// An empty fingerprint reaches here only when the SSID was blank and
    /// the MAC unusable, which is reported like any unknown network.
    fn of(result: &Result<AggregatedResult, FingerprintError>) -> Self {
        match result.as_ref().map(AggregatedResult::outcome) {
            Ok(Outcome::Keys) => Verdict::Keys,
            Ok(Outcome::NoMatch) | Err(_) => Verdict::Unsupported,
            Ok(Outcome::AllFailed | Outcome::NoCandidates) => Verdict::NoKeys,
        }
    }

    fn exit_code(self) -> u8 {
        match self {
            Verdict::Keys => 0,
            Verdict::NoKeys => 1,
            Verdict::Unsupported => 2,
        }
    }
}

/// MAC text the run ignored. With an empty fingerprint any non-blank MAC
/// was necessarily malformed.
fn ignored_mac<'a>(
    result: &'a Result<AggregatedResult, FingerprintError>,
    given: Option<&'a str>,
) -> Option<&'a str> {
    match result {
        Ok(result) => result.discarded_mac(),
        Err(FingerprintError::Empty) => given.map(str::trim).filter(|mac| !mac.is_empty()),
        Err(FingerprintError::InvalidMac(text)) => Some(text.as_str()),
    }
}

pub fn calc(ssid: Option<String>, mac: Option<String>, cfg: &Config) -> anyhow::Result<ExitCode> {
    let ssid = ssid.unwrap_or_default();
    let options = DispatchOptions {
        parallel: cfg.parallel,
    };

    let result = {
        let _spinner = (!cfg.quiet).then(|| spinner::start("Calculating keys. This can take a while."));
        match_and_dispatch_with(&ssid, mac.as_deref(), &options)
    };

    if let Some(bad_mac) = ignored_mac(&result, mac.as_deref()) {
        warn!(mac = bad_mac, "Invalid MAC. It will not be used.");
    }

    let verdict = Verdict::of(&result);
    let Ok(result) = result else {
        error!("Unsupported network. Check the MAC address and the SSID.");
        return Ok(ExitCode::from(verdict.exit_code()));
    };

    if !cfg.quiet && verdict != Verdict::Unsupported {
        network_details(&result);
    }
    for failure in result.failures() {
        error!(algorithm = failure.algorithm, reason = %failure.reason, "Errors while calculating.");
    }

    match verdict {
        Verdict::Keys => print_keys(&result, cfg),
        Verdict::NoKeys => {
            error!("No keys were calculated.");
            if !cfg.quiet {
                print::no_keys();
            }
        }
        Verdict::Unsupported => error!("Unsupported network. Check the MAC address and the SSID."),
    }

    Ok(ExitCode::from(verdict.exit_code()))
}

fn network_details(result: &AggregatedResult) {
    let mut rows = Vec::new();
    if !result.ssid().is_empty() {
        rows.push((String::from("SSID"), result.ssid().color(colors::TEXT_DEFAULT)));
    }
    if let Some(mac) = result.mac() {
        rows.extend(format::mac_to_key_value_pair(mac));
    }
    rows.push((String::from("Matches"), result.matched().join(", ").color(colors::ACCENT)));
    print::field_table(&rows);
}

fn print_keys(result: &AggregatedResult, cfg: &Config) {
    if cfg.quiet {
        if cfg.show_algorithm {
            result.labelled().for_each(|line| print::print(&line));
        } else {
            result.keys().for_each(print::print);
        }
        return;
    }

    let network = match result.mac() {
        Some(mac) if result.ssid().is_empty() => mac.to_string(),
        _ => result.ssid().to_string(),
    };
    success!("Calculated Passwords for {}", network);

    let lines: Vec<String> = result
        .candidates()
        .iter()
        .map(|candidate| format::key_line(candidate, cfg.show_algorithm))
        .collect();
    print::key_block(&network, &lines);
}
