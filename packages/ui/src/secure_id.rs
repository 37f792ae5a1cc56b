//! Reversible obfuscation of profile ids placed in detail URLs.
//!
//! The id is XORed with a repeating key and hex-encoded. This keeps raw ids out
//! of the address bar; it is not encryption.

pub fn encode_profile_id(profile_id: &str, key: &str) -> String {
    hex::encode(xor_with_key(profile_id.as_bytes(), key))
}

/// Inverse of [`encode_profile_id`]. `None` if the token is not valid hex or
/// does not decode to UTF-8.
pub fn decode_profile_id(token: &str, key: &str) -> Option<String> {
    let bytes = hex::decode(token.trim()).ok()?;
    String::from_utf8(xor_with_key(&bytes, key)).ok()
}

fn xor_with_key(bytes: &[u8], key: &str) -> Vec<u8> {
    if key.is_empty() {
        return bytes.to_vec();
    }
    bytes
        .iter()
        .zip(key.as_bytes().iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_hides_the_raw_id() {
        let token = encode_profile_id("VF123456", "matrimony");
        assert!(!token.contains("VF123456"));
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(decode_profile_id(&token, "matrimony").as_deref(), Some("VF123456"));
    }

    #[test]
    fn test_wrong_or_garbled_input() {
        let token = encode_profile_id("VM42", "k1");
        assert_ne!(decode_profile_id(&token, "k2").as_deref(), Some("VM42"));
        assert_eq!(decode_profile_id("not-hex", "k1"), None);
        assert_eq!(decode_profile_id(&encode_profile_id("VM42", ""), ""), Some("VM42".to_string()));
    }
}
