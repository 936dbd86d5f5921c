//! Small hex and string helpers shared by the vendor formulas.

/// Value of one ASCII hex digit, either case.
pub fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Every character of `s` as a hex digit value.
pub fn nibbles(s: &str) -> Option<Vec<u8>> {
    s.bytes().map(nibble).collect()
}

/// The last `len` bytes of an ASCII string.
pub fn tail(s: &str, len: usize) -> Option<&str> {
    let start = s.len().checked_sub(len)?;
    s.get(start..)
}

/// Uppercase hex digit for a value in `0..16`.
pub fn digit_upper(value: u8) -> char {
    char::from(b"0123456789ABCDEF"[usize::from(value & 0x0F)])
}
