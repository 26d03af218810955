//! Dictionary file loading (JSON / YAML)

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Dictionary;
use crate::error::{GuidWordsError, Result};

const BUILTIN_WORDS: &str = include_str!("../../data/words.json");

/// On-disk dictionary shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryFile {
    /// Byte hex ("00".."ff") -> word
    pub data: BTreeMap<String, String>,
    /// Optional precomputed word -> byte hex. Checked against `data` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<BTreeMap<String, String>>,
}

impl DictionaryFile {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validate and build the in-memory dictionary.
    pub fn into_dictionary(self) -> Result<Dictionary> {
        let dict = Dictionary::from_table(&self.data)?;

        if let Some(reverse) = &self.reverse {
            let mut seen = BTreeSet::new();
            for (word, byte_hex) in reverse {
                let normalized = word.trim().to_lowercase();
                let expected = dict.lookup_byte(&normalized).map(|b| format!("{:02x}", b));
                if expected.as_deref() != Some(byte_hex.trim().to_lowercase().as_str())
                    || !seen.insert(normalized)
                {
                    return Err(GuidWordsError::ReverseMismatch(word.clone()));
                }
            }
            // every entry is a distinct vocabulary word, so only a missing word remains
            if let Some((_, missing)) = dict.iter().find(|(_, w)| !seen.contains(*w)) {
                return Err(GuidWordsError::ReverseMismatch(missing.to_string()));
            }
        }

        Ok(dict)
    }
}

impl Dictionary {
    /// The dictionary shipped with the crate.
    pub fn builtin() -> Result<Self> {
        DictionaryFile::from_json(BUILTIN_WORDS)?.into_dictionary()
    }

    /// Load a dictionary file; the format follows the extension
    /// (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading dictionary from {}", path.display());

        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let file = match extension.as_str() {
            "json" => DictionaryFile::from_json(&content)?,
            "yaml" | "yml" => DictionaryFile::from_yaml(&content)?,
            other => {
                return Err(GuidWordsError::UnsupportedDictionaryFormat(if other.is_empty() {
                    path.display().to_string()
                } else {
                    other.to_string()
                }))
            }
        };

        let dict = file.into_dictionary()?;
        tracing::info!("Loaded dictionary with {} words from {}", dict.words.len(), path.display());
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionary_is_valid() {
        let dict = Dictionary::builtin().unwrap();
        assert_eq!(dict.word(0x00), "aardvark");
        assert_eq!(dict.word(0x01), "absurd");
        assert_eq!(dict.word(0xff), "zulu");
        assert_eq!(dict.lookup_byte("zulu"), Some(0xff));
    }

    #[test]
    fn test_yaml_dictionary_file() {
        let mut yaml = String::from("data:\n");
        for b in 0..=255u8 {
            yaml.push_str(&format!("  \"{:02x}\": w{}\n", b, b));
        }
        let dict = DictionaryFile::from_yaml(&yaml).unwrap().into_dictionary().unwrap();
        assert_eq!(dict.word(0x10), "w16");
    }

    #[test]
    fn test_reverse_table_must_agree() {
        let builtin = Dictionary::builtin().unwrap();
        let data = builtin.to_table();
        let reverse: BTreeMap<String, String> =
            data.iter().map(|(k, v)| (v.clone(), k.clone())).collect();

        let file = DictionaryFile {
            data: data.clone(),
            reverse: Some(reverse.clone()),
        };
        assert!(file.into_dictionary().is_ok());

        let mut wrong_byte = reverse.clone();
        wrong_byte.insert("aardvark".to_string(), "01".to_string());
        let file = DictionaryFile {
            data: data.clone(),
            reverse: Some(wrong_byte),
        };
        assert!(matches!(
            file.into_dictionary().unwrap_err(),
            GuidWordsError::ReverseMismatch(w) if w == "aardvark"
        ));

        // same size, but "absurd" replaced by a case variant of "aardvark"
        let mut case_variant = reverse.clone();
        case_variant.remove("absurd");
        case_variant.insert("AARDVARK".to_string(), "00".to_string());
        let file = DictionaryFile {
            data: data.clone(),
            reverse: Some(case_variant),
        };
        assert!(matches!(
            file.into_dictionary().unwrap_err(),
            GuidWordsError::ReverseMismatch(w) if w.eq_ignore_ascii_case("aardvark")
        ));

        // a word left out entirely
        let mut missing = reverse;
        missing.remove("zulu");
        let file = DictionaryFile {
            data,
            reverse: Some(missing),
        };
        assert!(matches!(
            file.into_dictionary().unwrap_err(),
            GuidWordsError::ReverseMismatch(w) if w == "zulu"
        ));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = DictionaryFile::from_json("{\"data\": [1, 2]}").unwrap_err();
        assert!(matches!(err, GuidWordsError::Json(_)));
    }
}
