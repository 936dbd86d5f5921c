//! Models that ship one factory key for every unit.

use keygr_common::error::KeygenError;

use super::{CandidateSet, Keygen};
use crate::registry::{AlgorithmDescriptor, Rule};

const CONN_KEY: &str = "1234567890123";
const ANDARED_KEY: &str = "6b629f4c299371737494c61b5a101693a2d4e9e1f3e1320f3ebf9ae379cecf32";

pub fn conn_descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Conn",
        "Conn-x (Thomson TG782)",
        Rule::ssid("conn-x[0-9a-fA-F]{6}"),
        |_| Box::new(FixedKeygen(CONN_KEY)),
    )
}

pub fn andared_descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(
        "Andared",
        "Andared",
        Rule::SsidEquals("Andared"),
        |_| Box::new(FixedKeygen(ANDARED_KEY)),
    )
}

pub struct FixedKeygen(&'static str);

impl Keygen for FixedKeygen {
    fn generate(&self) -> Result<CandidateSet, KeygenError> {
        Ok(vec![self.0.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::keys;

    #[test]
    fn conn_key() {
        assert_eq!(keys(&conn_descriptor(), "conn-x1a2b3c", None), [CONN_KEY]);
    }

    #[test]
    fn andared_key_ignores_mac() {
        assert_eq!(
            keys(&andared_descriptor(), "Andared", Some("00:11:22:33:44:55")),
            [ANDARED_KEY]
        );
    }
}
