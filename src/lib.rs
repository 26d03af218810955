pub mod codec;
pub mod dictionary;
pub mod error;
pub mod facade;

pub use codec::{
    decode, decode_bytes, decode_value, encode, encode_bytes, encode_opt, encode_value,
    split_words, WordsInput,
};
pub use dictionary::{Dictionary, DictionaryFile, DICTIONARY_SIZE};
pub use error::{GuidWordsError, Result};
pub use facade::{
    generate_identifier, hash_with_algorithm, GeneratedIdentifier, HashAlgorithm, HashedWords,
    IdentifierProvider, UuidV4Provider,
};
