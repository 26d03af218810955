use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidWordsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid hex character '{character}' at position {position}: only 0-9 and a-f are allowed")]
    InvalidHexCharacter { character: char, position: usize },

    #[error("Invalid input type: expected a string or a list of strings, got {0}")]
    InvalidInputType(&'static str),

    #[error("Unknown word: '{word}'{}", suggestion_hint(.suggestion))]
    UnknownWord {
        word: String,
        suggestion: Option<String>,
    },

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Dictionary must contain exactly 256 entries, found {0}")]
    DictionaryEntryCount(usize),

    #[error("Dictionary key is not a two-digit hex byte: '{0}'")]
    InvalidByteKey(String),

    #[error("Dictionary has no word for byte {0:02x}")]
    MissingByte(u8),

    #[error("Dictionary word '{word}' is used for both {first:02x} and {second:02x}")]
    DuplicateWord { word: String, first: u8, second: u8 },

    #[error("Dictionary word for byte {0:02x} is empty")]
    EmptyWord(u8),

    #[error("Dictionary word for byte {0:02x} contains whitespace")]
    InvalidWord(u8),

    #[error("Dictionary reverse table disagrees with forward table at '{0}'")]
    ReverseMismatch(String),

    #[error("Unsupported dictionary format: {0}")]
    UnsupportedDictionaryFormat(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, GuidWordsError>;
