pub mod fingerprint;
pub mod mac;
