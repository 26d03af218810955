use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use guid_words::{codec, facade, Dictionary, HashAlgorithm, UuidV4Provider};
use guid_words::Result;

#[derive(Parser)]
#[command(name = "guid-words")]
#[command(about = "Render identifiers and hashes as dictionary words, and back")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Generate a random identifier with its words
    guid-words generate

    # Encode a hex string
    guid-words encode 0aff

    # Decode words back to hex
    guid-words decode "allow zulu"

    # Hash a string and render the digest as words
    guid-words hash "hello world" --algorithm md5

    # Use a custom dictionary
    guid-words --dictionary words.yaml encode cafe
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dictionary file (.json, .yaml or .yml); the built-in one is used otherwise
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate random identifiers and their words
    Generate {
        /// Number of identifiers
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Encode a hex string as words
    Encode {
        /// Hex string (odd lengths get a leading zero)
        hex: String,
    },

    /// Decode words back into a hex string
    Decode {
        /// Words, as separate arguments or one quoted string
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Hash a string and render the digest as words
    Hash {
        /// Input string
        input: String,

        /// Hash algorithm (md5, sha256 or xxh3)
        #[arg(long, default_value = "sha256")]
        algorithm: String,
    },

    /// Print the dictionary table
    Words,
}

pub fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_path(path),
        None => Dictionary::builtin(),
    }
}

pub fn generate(dict: &Dictionary, count: usize, format: OutputFormat) -> Result<()> {
    let generated = (0..count)
        .map(|_| facade::generate_identifier(dict, &UuidV4Provider))
        .collect::<Result<Vec<_>>>()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        for (i, item) in generated.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", item.hex);
            println!("{}", item.words);
        }
    }

    Ok(())
}

pub fn encode(dict: &Dictionary, hex: &str, format: OutputFormat) -> Result<()> {
    let words = codec::encode(dict, hex)?;

    if format == OutputFormat::Json {
        let output = serde_json::json!({ "hex": hex, "words": words });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", words);
    }

    Ok(())
}

pub fn decode(dict: &Dictionary, words: &[String], format: OutputFormat) -> Result<()> {
    // Each argument may itself hold several space-separated words
    let joined = words.join(" ");
    let hex = codec::decode(dict, &joined)?;

    if format == OutputFormat::Json {
        let tokens: Vec<&str> = codec::split_words(&joined).collect();
        let output = serde_json::json!({ "words": tokens, "hex": hex });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", hex);
    }

    Ok(())
}

pub fn hash(dict: &Dictionary, input: &str, algorithm: &str, format: OutputFormat) -> Result<()> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let hashed = facade::hash_with_algorithm(dict, input, algorithm)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&hashed)?);
    } else {
        println!("{} ({})", hashed.digest, hashed.algorithm);
        println!("{}", hashed.words);
    }

    Ok(())
}

pub fn list_words(dict: &Dictionary, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let file = guid_words::DictionaryFile {
            data: dict.to_table(),
            reverse: None,
        };
        println!("{}", serde_json::to_string_pretty(&file)?);
    } else {
        for (byte, word) in dict.iter() {
            println!("{:02x} {}", byte, word);
        }
    }

    Ok(())
}
