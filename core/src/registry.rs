//! # Algorithm Registry
//!
//! The static catalog of vendor algorithms. Each [`AlgorithmDescriptor`] pairs a
//! stable id with an applicability [`Rule`] and a constructor for its keygen.
//!
//! The built-in catalog is assembled once, on first use, and never mutated
//! afterwards. Its order is part of the contract: matching and dispatch both
//! follow it, so it decides the order of every aggregated result.

use std::sync::OnceLock;

use keygr_common::network::fingerprint::NetworkFingerprint;
use regex::Regex;

use crate::algorithms::{self, Keygen};

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Builds a keygen instance bound to one fingerprint.
pub type Constructor = fn(&NetworkFingerprint) -> Box<dyn Keygen>;

/// Pure predicate over a [`NetworkFingerprint`].
#[derive(Debug)]
pub enum Rule {
    /// The whole SSID matches the pattern.
    SsidMatches(Regex),
    /// The SSID is exactly this string.
    SsidEquals(&'static str),
    /// A MAC is present and its OUI is listed.
    OuiIn(&'static [[u8; 3]]),
    /// No MAC is known, or its OUI is listed.
    OuiIfPresent(&'static [[u8; 3]]),
    All(Vec<Rule>),
    Any(Vec<Rule>),
}

impl Rule {
    /// Compiles an SSID pattern anchored at both ends.
    ///
    /// # Panics
    /// On an invalid pattern. Patterns are literals in the catalog and are
    /// all compiled by the registry tests.
    pub fn ssid(pattern: &str) -> Self {
        let anchored = format!("^(?:{pattern})$");
        Rule::SsidMatches(Regex::new(&anchored).expect("invalid SSID pattern in catalog"))
    }

    pub fn evaluate(&self, fingerprint: &NetworkFingerprint) -> bool {
        match self {
            Rule::SsidMatches(regex) => {
                fingerprint.has_ssid() && regex.is_match(fingerprint.ssid())
            }
            Rule::SsidEquals(ssid) => fingerprint.has_ssid() && fingerprint.ssid() == *ssid,
            Rule::OuiIn(ouis) => fingerprint
                .mac()
                .is_some_and(|mac| ouis.contains(&mac.oui())),
            Rule::OuiIfPresent(ouis) => fingerprint
                .mac()
                .is_none_or(|mac| ouis.contains(&mac.oui())),
            Rule::All(rules) => rules.iter().all(|rule| rule.evaluate(fingerprint)),
            Rule::Any(rules) => rules.iter().any(|rule| rule.evaluate(fingerprint)),
        }
    }

    /// Whether the rule looks at the SSID at all.
    pub fn inspects_ssid(&self) -> bool {
        match self {
            Rule::SsidMatches(_) | Rule::SsidEquals(_) => true,
            Rule::OuiIn(_) | Rule::OuiIfPresent(_) => false,
            Rule::All(rules) | Rule::Any(rules) => rules.iter().any(Rule::inspects_ssid),
        }
    }
}

/// Static metadata for one vendor algorithm.
#[derive(Debug)]
pub struct AlgorithmDescriptor {
    id: &'static str,
    name: &'static str,
    rule: Rule,
    build: Constructor,
}

impl AlgorithmDescriptor {
    pub fn new(id: &'static str, name: &'static str, rule: Rule, build: Constructor) -> Self {
        Self { id, name, rule, build }
    }

    /// Short stable identifier, printed in `id:key` output.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human readable list of the routers the scheme covers.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn applies_to(&self, fingerprint: &NetworkFingerprint) -> bool {
        self.rule.evaluate(fingerprint)
    }

    /// Creates the keygen for `fingerprint`.
    pub fn instantiate(&self, fingerprint: &NetworkFingerprint) -> Box<dyn Keygen> {
        (self.build)(fingerprint)
    }
}

/// Ordered, read-only set of descriptors.
#[derive(Debug)]
pub struct Registry {
    descriptors: Vec<AlgorithmDescriptor>,
}

impl Registry {
    /// Composes a registry from an explicit list, keeping its order.
    pub fn from_descriptors(descriptors: Vec<AlgorithmDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The catalog of every vendor algorithm shipped with keygr.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| Registry::from_descriptors(algorithms::catalog()))
    }

    pub fn list(&self) -> &[AlgorithmDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, id: &str) -> Option<&AlgorithmDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.id == id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
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
