use std::fmt;
use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::xxh3_64;

use crate::codec;
use crate::dictionary::Dictionary;
use crate::error::{GuidWordsError, Result};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// 128-bit MD5
    Md5,
    /// 256-bit SHA-256
    Sha256,
    /// 64-bit XXH3
    Xxh3,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Xxh3 => "xxh3",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha256 => 32,
            Self::Xxh3 => 8,
        }
    }

    /// Lowercase hex digest of `input`.
    pub fn digest_hex(&self, input: &str) -> String {
        match self {
            Self::Md5 => hex::encode(Md5::digest(input.as_bytes())),
            Self::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
            Self::Xxh3 => format!("{:016x}", xxh3_64(input.as_bytes())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = GuidWordsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "xxh3" => Ok(Self::Xxh3),
            _ => Err(GuidWordsError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedWords {
    pub algorithm: HashAlgorithm,
    pub digest: String,
    pub words: String,
}

/// Hash `input` and render the digest as words.
pub fn hash_with_algorithm(
    dict: &Dictionary,
    input: &str,
    algorithm: HashAlgorithm,
) -> Result<HashedWords> {
    let digest = algorithm.digest_hex(input);
    let words = codec::encode(dict, &digest)?;

    Ok(HashedWords {
        algorithm,
        digest,
        words,
    })
}
