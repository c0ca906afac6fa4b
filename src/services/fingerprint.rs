use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `text`. Stable across processes and builds.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn exact_text_no_normalization() {
        assert_ne!(fingerprint("casa"), fingerprint("Casa"));
        assert_ne!(fingerprint("casa"), fingerprint(" casa"));
        assert_eq!(fingerprint("casa").len(), 64);
    }
}
