//! Identifier & Hash Facade
//!
//! Produces a value from an outside source (a random identifier or a digest)
//! and renders it as words through the codec.

pub mod hash;
pub mod identifier;

pub use hash::{hash_with_algorithm, HashAlgorithm, HashedWords};
pub use identifier::{generate_identifier, GeneratedIdentifier, IdentifierProvider, UuidV4Provider};
