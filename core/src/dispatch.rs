//! # Dispatch Aggregator
//!
//! Runs every matched algorithm against one fingerprint and merges the
//! candidates into a single [`AggregatedResult`].
//!
//! A failing algorithm is recorded and skipped, it never takes the rest of the
//! batch down with it. Results follow registry-match order, then each
//! algorithm's own candidate order, whether the batch ran sequentially or on
//! the `rayon` pool.

use keygr_common::error::KeygenError;
use keygr_common::network::fingerprint::NetworkFingerprint;
use keygr_common::network::mac::MacAddress;
use rayon::prelude::*;
use tracing::debug;

use crate::algorithms::CandidateSet;
use crate::registry::AlgorithmDescriptor;

/// Knobs the engine takes from the front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Run matched algorithms concurrently.
    pub parallel: bool,
}

/// One password candidate and the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub algorithm: &'static str,
    pub key: String,
}

/// An algorithm that matched but could not derive candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub algorithm: &'static str,
    pub reason: KeygenError,
}

/// How a run ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one candidate was produced.
    Keys,
    /// No registered algorithm applies to the network.
    NoMatch,
    /// Every matched algorithm failed.
    AllFailed,
    /// Some algorithms ran, none produced a candidate.
    NoCandidates,
}

/// Everything a front end needs to report a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedResult {
    ssid: String,
    mac: Option<MacAddress>,
    discarded_mac: Option<String>,
    matched: Vec<&'static str>,
    candidates: Vec<Candidate>,
    failures: Vec<Failure>,
}

impl AggregatedResult {
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn mac(&self) -> Option<MacAddress> {
        self.mac
    }

    /// MAC text that failed to parse and was ignored for matching.
    pub fn discarded_mac(&self) -> Option<&str> {
        self.discarded_mac.as_deref()
    }

    pub(crate) fn set_discarded_mac(&mut self, text: Option<String>) {
        self.discarded_mac = text;
    }

    /// Ids of the matched algorithms, in match order.
    pub fn matched(&self) -> &[&'static str] {
        &self.matched
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// The bare keys, in result order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|candidate| candidate.key.as_str())
    }

    /// `algorithm:key` lines, in result order.
    pub fn labelled(&self) -> impl Iterator<Item = String> + '_ {
        self.candidates
            .iter()
            .map(|candidate| format!("{}:{}", candidate.algorithm, candidate.key))
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        if !self.candidates.is_empty() {
            Outcome::Keys
        } else if self.matched.is_empty() {
            Outcome::NoMatch
        } else if self.failures.len() == self.matched.len() {
            Outcome::AllFailed
        } else {
            Outcome::NoCandidates
        }
    }
}

pub struct DispatchAggregator {
    options: DispatchOptions,
}

impl DispatchAggregator {
    pub fn new(options: DispatchOptions) -> Self {
        Self { options }
    }

    /// Instantiates and runs every descriptor in `matches` against `fingerprint`.
    pub fn run(
        &self,
        matches: &[&AlgorithmDescriptor],
        fingerprint: &NetworkFingerprint,
    ) -> AggregatedResult {
        let runs: Vec<Result<CandidateSet, KeygenError>> = if self.options.parallel {
            matches
                .par_iter()
                .map(|descriptor| run_one(descriptor, fingerprint))
                .collect()
        } else {
            matches
                .iter()
                .map(|descriptor| run_one(descriptor, fingerprint))
                .collect()
        };

        let mut result = AggregatedResult {
            ssid: fingerprint.ssid().to_string(),
            mac: fingerprint.mac(),
            discarded_mac: None,
            matched: matches.iter().map(|descriptor| descriptor.id()).collect(),
            candidates: Vec::new(),
            failures: Vec::new(),
        };

        for (descriptor, run) in matches.iter().zip(runs) {
            match run {
                Ok(keys) => result.candidates.extend(keys.into_iter().map(|key| Candidate {
                    algorithm: descriptor.id(),
                    key,
                })),
                Err(reason) => {
                    debug!(algorithm = descriptor.id(), %reason, "algorithm failed");
                    result.failures.push(Failure {
                        algorithm: descriptor.id(),
                        reason,
                    });
                }
            }
        }

        result
    }
}

impl Default for DispatchAggregator {
    fn default() -> Self {
        Self::new(DispatchOptions::default())
    }
}

fn run_one(
    descriptor: &AlgorithmDescriptor,
    fingerprint: &NetworkFingerprint,
) -> Result<CandidateSet, KeygenError> {
    let keygen = descriptor.instantiate(fingerprint);
    let keys = keygen.generate()?;
    debug!(algorithm = descriptor.id(), count = keys.len(), "generated candidates");
    Ok(keys)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Keygen;
    use crate::registry::Rule;

    struct Fixed(Vec<&'static str>);

    impl Keygen for Fixed {
        fn generate(&self) -> Result<CandidateSet, KeygenError> {
            Ok(self.0.iter().map(|key| key.to_string()).collect())
        }
    }

    struct Broken;

    impl Keygen for Broken {
        fn generate(&self) -> Result<CandidateSet, KeygenError> {
            Err(KeygenError::MissingMac)
        }
    }

    fn first(_: &NetworkFingerprint) -> Box<dyn Keygen> {
        Box::new(Fixed(vec!["b", "a", "b"]))
    }

    fn second(_: &NetworkFingerprint) -> Box<dyn Keygen> {
        Box::new(Fixed(vec!["z"]))
    }

    fn nothing(_: &NetworkFingerprint) -> Box<dyn Keygen> {
        Box::new(Fixed(Vec::new()))
    }

    fn broken(_: &NetworkFingerprint) -> Box<dyn Keygen> {
        Box::new(Broken)
    }

    fn descriptor(id: &'static str, build: crate::registry::Constructor) -> AlgorithmDescriptor {
        AlgorithmDescriptor::new(id, id, Rule::ssid(".*"), build)
    }

    fn fingerprint() -> NetworkFingerprint {
        NetworkFingerprint::new("net", None).unwrap()
    }

    #[test]
    fn keeps_match_then_candidate_order() {
        let (a, b) = (descriptor("A", first), descriptor("B", second));
        let result = DispatchAggregator::default().run(&[&a, &b], &fingerprint());
        let lines: Vec<String> = result.labelled().collect();
        assert_eq!(lines, ["A:b", "A:a", "A:b", "B:z"]);
        assert_eq!(result.outcome(), Outcome::Keys);
    }

    #[test]
    fn failure_is_isolated() {
        let (a, b, c) = (descriptor("A", broken), descriptor("B", second), descriptor("C", first));
        let result = DispatchAggregator::default().run(&[&a, &b, &c], &fingerprint());
        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys, ["z", "b", "a", "b"]);
        assert_eq!(result.failure_count(), 1);
        assert_eq!(result.failures()[0].algorithm, "A");
        assert_eq!(result.failures()[0].reason, KeygenError::MissingMac);
    }

    #[test]
    fn zero_matches_is_no_match() {
        let result = DispatchAggregator::default().run(&[], &fingerprint());
        assert!(result.is_empty());
        assert_eq!(result.failure_count(), 0);
        assert_eq!(result.outcome(), Outcome::NoMatch);
    }

    #[test]
    fn all_failed_is_distinct_from_no_match() {
        let (a, b) = (descriptor("A", broken), descriptor("B", broken));
        let result = DispatchAggregator::default().run(&[&a, &b], &fingerprint());
        assert!(result.is_empty());
        assert_eq!(result.failure_count(), 2);
        assert_eq!(result.outcome(), Outcome::AllFailed);
    }

    #[test]
    fn empty_output_is_no_candidates() {
        let (a, b) = (descriptor("A", nothing), descriptor("B", broken));
        let result = DispatchAggregator::default().run(&[&a, &b], &fingerprint());
        assert_eq!(result.outcome(), Outcome::NoCandidates);
    }

    #[test]
    fn parallel_run_matches_sequential_run() {
        let descriptors: Vec<AlgorithmDescriptor> = (0..16)
            .map(|i| match i % 3 {
                0 => descriptor("A", first),
                1 => descriptor("B", broken),
                _ => descriptor("C", second),
            })
            .collect();
        let refs: Vec<&AlgorithmDescriptor> = descriptors.iter().collect();

        let sequential = DispatchAggregator::default().run(&refs, &fingerprint());
        let parallel =
            DispatchAggregator::new(DispatchOptions { parallel: true }).run(&refs, &fingerprint());
        assert_eq!(sequential, parallel);
    }
}
