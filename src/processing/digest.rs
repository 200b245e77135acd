//! Content digests.
use std::fmt;
use std::hash::Hasher;
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest, Sha256};
use twox_hash::XxHash64;

use crate::error::Error;

/// Digest algorithms usable as sentence keys.
///
/// Names are parsed case-insensitively, with or without dash (`MD5`, `sha-1`, `SHA256`, `xxh64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    /// Not cryptographic, but fast.
    Xxh64,
}

impl DigestAlgorithm {
    /// Lowercase hexadecimal digest of `bytes`.
    pub fn hex_digest(&self, bytes: &[u8]) -> String {
        match self {
            DigestAlgorithm::Md5 => format!("{:x}", md5::compute(bytes)),
            DigestAlgorithm::Sha1 => format!("{:x}", Sha1::digest(bytes)),
            DigestAlgorithm::Sha256 => format!("{:x}", Sha256::digest(bytes)),
            DigestAlgorithm::Xxh64 => {
                let mut hasher = XxHash64::with_seed(0);
                hasher.write(bytes);
                format!("{:016x}", hasher.finish())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Xxh64 => "XXH64",
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "").as_str() {
            "MD5" => Ok(DigestAlgorithm::Md5),
            "SHA1" => Ok(DigestAlgorithm::Sha1),
            "SHA256" => Ok(DigestAlgorithm::Sha256),
            "XXH64" => Ok(DigestAlgorithm::Xxh64),
            _ => Err(Error::UnknownDigest(s.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
