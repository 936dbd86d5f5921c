use crate::terminal::colors;
use colored::*;
use keygr_common::network::mac::{MacAddress, get_vendor};
use keygr_core::Candidate;
use keygr_core::registry::Rule;

/// What a rule needs from the network, in words.
pub fn rule_inputs(rule: &Rule) -> &'static str {
    match (rule.inspects_ssid(), inspects_mac(rule)) {
        (true, true) => "SSID + MAC",
        (true, false) => "SSID",
        (false, true) => "MAC",
        (false, false) => "any",
    }
}

fn inspects_mac(rule: &Rule) -> bool {
    match rule {
        Rule::SsidMatches(_) | Rule::SsidEquals(_) => false,
        Rule::OuiIn(_) | Rule::OuiIfPresent(_) => true,
        Rule::All(rules) | Rule::Any(rules) => rules.iter().any(inspects_mac),
    }
}

pub fn mac_to_key_value_pair(mac: MacAddress) -> Vec<(String, ColoredString)> {
    let mut pairs = vec![(String::from("MAC"), mac.to_string().color(colors::MAC_ADDR))];
    if let Some(vendor) = get_vendor(mac) {
        pairs.push((String::from("Vendor"), vendor.color(colors::TEXT_DEFAULT)));
    }
    pairs
}

pub fn key_line(candidate: &Candidate, show_algorithm: bool) -> String {
    let key = candidate.key.color(colors::KEY);
    if !show_algorithm {
        return key.to_string();
    }
    format!(
        "{}{}{}",
        candidate.algorithm.color(colors::PRIMARY),
        ":".color(colors::SEPARATOR),
        key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_inputs_reflect_inspected_fields() {
        assert_eq!(rule_inputs(&Rule::SsidEquals("Andared")), "SSID");
        assert_eq!(rule_inputs(&Rule::OuiIn(&[[0x00, 0x08, 0x27]])), "MAC");
        let both = Rule::All(vec![Rule::ssid("WLAN_[0-9A-F]{4}"), Rule::OuiIn(&[[0x64, 0x68, 0x0C]])]);
        assert_eq!(rule_inputs(&both), "SSID + MAC");
        assert_eq!(rule_inputs(&Rule::Any(vec![])), "any");
    }
}
