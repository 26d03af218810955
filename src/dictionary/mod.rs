//! Word Dictionary
//!
//! Immutable byte <-> word tables. Built once, validated up front, then
//! shared read-only by every codec call.

pub mod loader;

pub use loader::DictionaryFile;

use std::collections::{BTreeMap, HashMap};

use crate::error::{GuidWordsError, Result};

/// Number of distinct byte values, and so of dictionary entries.
pub const DICTIONARY_SIZE: usize = 256;

/// Bijective mapping between the 256 byte values and their words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Indexed by byte value
    words: Vec<String>,
    reverse: HashMap<String, u8>,
}

impl Dictionary {
    /// Build a dictionary from a forward table keyed by two-digit hex bytes.
    ///
    /// Keys are lowercased before parsing; words are trimmed and lowercased.
    /// The reverse table is derived here, so both directions are mutual
    /// inverses by construction.
    ///
    /// # Errors
    /// Fails if the table does not hold exactly one non-empty, unique word for
    /// every byte 00..ff, or if a word contains whitespace.
    pub fn from_table<K, V>(table: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut slots: Vec<Option<String>> = vec![None; DICTIONARY_SIZE];
        let mut count = 0usize;

        for (key, word) in table {
            count += 1;
            let byte = parse_byte_key(key.as_ref())?;
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(GuidWordsError::EmptyWord(byte));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(GuidWordsError::InvalidWord(byte));
            }
            slots[byte as usize] = Some(word);
        }

        if count != DICTIONARY_SIZE {
            return Err(GuidWordsError::DictionaryEntryCount(count));
        }

        let mut words = Vec::with_capacity(DICTIONARY_SIZE);
        let mut reverse = HashMap::with_capacity(DICTIONARY_SIZE);
        for (byte, slot) in slots.into_iter().enumerate() {
            let byte = byte as u8;
            let word = slot.ok_or(GuidWordsError::MissingByte(byte))?;
            if let Some(first) = reverse.insert(word.clone(), byte) {
                return Err(GuidWordsError::DuplicateWord {
                    word,
                    first,
                    second: byte,
                });
            }
            words.push(word);
        }

        Ok(Self { words, reverse })
    }

    /// Word for a byte value. Total over all bytes.
    pub fn word(&self, byte: u8) -> &str {
        &self.words[byte as usize]
    }

    /// Word for a two-digit hex byte such as `"0a"`.
    pub fn lookup_word(&self, byte_hex: &str) -> Option<&str> {
        parse_byte_key(byte_hex).ok().map(|byte| self.word(byte))
    }

    /// Byte value for a word, if the word is in the vocabulary.
    pub fn lookup_byte(&self, word: &str) -> Option<u8> {
        self.reverse.get(word).copied()
    }

    /// Closest vocabulary word to `word`, if any is similar enough.
    pub fn suggest(&self, word: &str) -> Option<&str> {
        const THRESHOLD: f64 = 0.8;

        self.words
            .iter()
            .map(|candidate| (candidate, strsim::jaro_winkler(word, candidate)))
            .filter(|(_, score)| *score >= THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate.as_str())
    }

    /// Iterate `(byte, word)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(byte, word)| (byte as u8, word.as_str()))
    }

    /// Forward table keyed by two-digit hex bytes, the on-disk shape.
    pub fn to_table(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(byte, word)| (format!("{:02x}", byte), word.to_string()))
            .collect()
    }
}

fn parse_byte_key(key: &str) -> Result<u8> {
    let lowered = key.to_lowercase();
    let valid = lowered.len() == 2 && lowered.bytes().all(|b| b.is_ascii_hexdigit());
    if !valid {
        return Err(GuidWordsError::InvalidByteKey(key.to_string()));
    }
    u8::from_str_radix(&lowered, 16).map_err(|_| GuidWordsError::InvalidByteKey(key.to_string()))
}
