//! crates/og_io/src/hasher.rs
//!
//! SHA-256 digests of raw input bytes, lowercase hex.
//!
//! Digests identify the exact CSV files a report was built from; they are
//! computed over the bytes on disk, never over parsed content.

#![forbid(unsafe_code)]

use crate::IoResult;

/// True for a 64-char lowercase hex string (the only accepted digest form).
#[inline]
pub fn is_lower_hex_64(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// SHA-256 over raw bytes.
#[cfg(feature = "hash")]
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(bytes))
}

/// Fallible variant: errors when hashing is compiled out.
pub fn try_sha256_hex(bytes: &[u8]) -> IoResult<String> {
    #[cfg(feature = "hash")]
    {
        Ok(sha256_hex(bytes))
    }
    #[cfg(not(feature = "hash"))]
    {
        let _ = bytes;
        Err(crate::IoError::Hash("hash feature disabled".into()))
    }
}
