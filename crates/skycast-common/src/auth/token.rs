//! Opaque token generation for refresh tokens

use rand::RngCore;

/// Generate a cryptographically random opaque token, hex-encoded
///
/// `num_bytes` is the entropy in bytes; the returned string is twice
/// that length. The raw token is never re-derivable from storage.
#[must_use]
pub fn generate_opaque_token(num_bytes: usize) -> String {
    let mut bytes = vec![0u8; num_bytes];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        let token = generate_opaque_token(32);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_opaque_token(32), generate_opaque_token(32));
    }
}
