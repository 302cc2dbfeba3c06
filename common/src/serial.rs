use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const GROUPS: usize = 4;
const GROUP_LEN: usize = 4;
pub const SERIAL_LEN: usize = GROUPS * GROUP_LEN + GROUPS - 1;

/// Canonical form used for storage and every comparison.
pub fn normalize_serial(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Checks the `XXXX-XXXX-XXXX-XXXX` grammar. Letters are accepted in either
/// case, callers normalize before storing or looking up.
pub fn is_valid_serial_format(serial_key: &str) -> bool {
    if serial_key.len() != SERIAL_LEN {
        return false;
    }
    let parts: Vec<&str> = serial_key.split('-').collect();
    parts.len() == GROUPS
        && parts.iter().all(|part| {
            part.len() == GROUP_LEN && part.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

/// Draws a fresh key from the thread-local CSPRNG.
pub fn generate_serial() -> String {
    let mut rng = rand::rng();
    (0..GROUPS)
        .map(|_| {
            (0..GROUP_LEN)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-")
}
