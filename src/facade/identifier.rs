use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec;
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Source of fresh random identifiers, rendered as hex with optional separators.
pub trait IdentifierProvider {
    fn next_identifier(&self) -> String;
}

/// Random version 4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Provider;

impl IdentifierProvider for UuidV4Provider {
    fn next_identifier(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIdentifier {
    pub hex: String,
    pub words: String,
}

/// Generate an identifier and render it as words.
///
/// Separators (and anything else outside `0-9a-f`) are stripped before encoding.
pub fn generate_identifier(
    dict: &Dictionary,
    provider: &impl IdentifierProvider,
) -> Result<GeneratedIdentifier> {
    let hex: String = provider
        .next_identifier()
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let words = codec::encode(dict, &hex)?;

    Ok(GeneratedIdentifier { hex, words })
}
