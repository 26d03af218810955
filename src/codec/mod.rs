//! Byte-Word Codec
//!
//! Converts hex strings into space-separated dictionary words and back.
//! Every function takes the dictionary explicitly; nothing here holds state.

use serde_json::Value;

use crate::dictionary::Dictionary;
use crate::error::{GuidWordsError, Result};

/// Input accepted by [`decode`]: one space-separated string or a list of words.
///
/// Lists are borrowed from slices, arrays or `Vec`s of any string type.
#[derive(Debug, Clone)]
pub enum WordsInput<'a> {
    Text(&'a str),
    Words(Vec<&'a str>),
}

impl<'a> From<&'a str> for WordsInput<'a> {
    fn from(text: &'a str) -> Self {
        WordsInput::Text(text)
    }
}

impl<'a> From<&'a String> for WordsInput<'a> {
    fn from(text: &'a String) -> Self {
        WordsInput::Text(text.as_str())
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for WordsInput<'a> {
    fn from(words: &'a [S]) -> Self {
        WordsInput::Words(words.iter().map(AsRef::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for WordsInput<'a> {
    fn from(words: &'a [S; N]) -> Self {
        words.as_slice().into()
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for WordsInput<'a> {
    fn from(words: &'a Vec<S>) -> Self {
        words.as_slice().into()
    }
}

/// Encode a hex string as words, one word per byte.
///
/// Empty input yields an empty string. Input is lowercased, and an
/// odd-length string gets one leading `0` ("abc" encodes as "0abc").
///
/// # Errors
/// `InvalidHexCharacter` if any character falls outside `0-9a-f`.
pub fn encode(dict: &Dictionary, hex: &str) -> Result<String> {
    if hex.is_empty() {
        return Ok(String::new());
    }

    let mut nibbles = hex
        .to_lowercase()
        .chars()
        .enumerate()
        .map(|(position, character)| {
            // already lowercased, so to_digit accepts exactly 0-9a-f
            character
                .to_digit(16)
                .map(|digit| digit as u8)
                .ok_or(GuidWordsError::InvalidHexCharacter { character, position })
        })
        .collect::<Result<Vec<u8>>>()?;

    if nibbles.len() % 2 == 1 {
        nibbles.insert(0, 0);
    }

    let bytes: Vec<u8> = nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect();

    Ok(words_for(dict, &bytes))
}

/// [`encode`] for optional input; `None` yields an empty string.
pub fn encode_opt(dict: &Dictionary, hex: Option<&str>) -> Result<String> {
    match hex {
        Some(hex) => encode(dict, hex),
        None => Ok(String::new()),
    }
}

/// [`encode`] for dynamically typed input; anything but a string yields an
/// empty string.
pub fn encode_value(dict: &Dictionary, value: &Value) -> Result<String> {
    encode_opt(dict, value.as_str())
}

/// Encode raw bytes as words.
pub fn encode_bytes(dict: &Dictionary, bytes: &[u8]) -> String {
    words_for(dict, bytes)
}

fn words_for(dict: &Dictionary, bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| dict.word(b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode words back into a lowercase hex string.
///
/// A text input is split on spaces with empty tokens dropped, so irregular
/// spacing is tolerated. Tokens are trimmed and lowercased before lookup.
///
/// # Errors
/// `UnknownWord` for the first token missing from the dictionary.
pub fn decode<'a>(dict: &Dictionary, input: impl Into<WordsInput<'a>>) -> Result<String> {
    Ok(hex::encode(decode_bytes(dict, input)?))
}

/// [`decode`] returning the raw bytes.
pub fn decode_bytes<'a>(dict: &Dictionary, input: impl Into<WordsInput<'a>>) -> Result<Vec<u8>> {
    match input.into() {
        WordsInput::Text(text) => lookup_all(dict, split_words(text)),
        WordsInput::Words(words) => lookup_all(dict, words.into_iter()),
    }
}

/// [`decode`] for dynamically typed input.
///
/// # Errors
/// `InvalidInputType` unless the value is a string or an array of strings.
pub fn decode_value(dict: &Dictionary, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => decode(dict, text.as_str()),
        Value::Array(items) => {
            let words = items
                .iter()
                .map(|item| item.as_str().ok_or(GuidWordsError::InvalidInputType("array with non-string items")))
                .collect::<Result<Vec<&str>>>()?;
            decode(dict, &words)
        }
        Value::Null => Err(GuidWordsError::InvalidInputType("null")),
        Value::Bool(_) => Err(GuidWordsError::InvalidInputType("boolean")),
        Value::Number(_) => Err(GuidWordsError::InvalidInputType("number")),
        Value::Object(_) => Err(GuidWordsError::InvalidInputType("object")),
    }
}

/// Split text into word tokens the way [`decode`] does: on spaces, trimmed,
/// with empty tokens dropped.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').map(str::trim).filter(|token| !token.is_empty())
}

fn lookup_all<'w>(dict: &Dictionary, tokens: impl Iterator<Item = &'w str>) -> Result<Vec<u8>> {
    tokens
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let word = token.to_lowercase();
            dict.lookup_byte(&word).ok_or_else(|| GuidWordsError::UnknownWord {
                suggestion: dict.suggest(&word).map(str::to_string),
                word: token.to_string(),
            })
        })
        .collect()
}
