//! # Fingerprint Matcher
//!
//! Selects the vendor algorithms that could have produced the default key of a
//! network. Predicates are evaluated in registry order and the result keeps
//! that order, so two identical fingerprints always select the same sequence.

use keygr_common::network::fingerprint::NetworkFingerprint;
use tracing::debug;

use crate::registry::{AlgorithmDescriptor, Registry};

pub struct FingerprintMatcher<'r> {
    registry: &'r Registry,
}

impl<'r> FingerprintMatcher<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Every descriptor whose rule accepts `fingerprint`, in registry order.
    ///
    /// An empty result means no known scheme applies. It is a normal outcome.
    pub fn matches(&self, fingerprint: &NetworkFingerprint) -> Vec<&'r AlgorithmDescriptor> {
        let matched: Vec<&'r AlgorithmDescriptor> = self
            .registry
            .list()
            .iter()
            .filter(|descriptor| descriptor.applies_to(fingerprint))
            .collect();

        debug!(
            ssid = fingerprint.ssid(),
            matched = matched.len(),
            "matched fingerprint against {} algorithms",
            self.registry.len()
        );
        matched
    }
}

impl Default for FingerprintMatcher<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}
