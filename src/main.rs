//! Textkit CLI
//!
//! Command-line front end for the conversion, generation and hashing
//! utilities.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use textkit::{
    config::FileConfig,
    conversion::{convert_dynamic, convert_dynamic_or_default, TypeKind},
    generation::{charset, CharacterSet, RandomTextGenerator},
    transformation::{compute_hash_hex, to_byte_array, HashAlgorithm},
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "textkit", version, about = "Text conversion, random text and hashing utilities")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert text to a typed value
    Convert(ConvertArgs),
    /// Encode text to bytes
    Bytes {
        /// Text to encode
        text: String,
        /// Encoding label (default: utf-8)
        #[arg(short, long)]
        encoding: Option<String>,
        /// Print lowercase hex instead of decimal bytes
        #[arg(long)]
        hex: bool,
    },
    /// Hash text
    Hash {
        /// Text to hash
        text: String,
        /// Digest algorithm (md5, sha1, sha256, sha384, sha512, blake3)
        #[arg(short, long)]
        algorithm: Option<HashAlgorithm>,
        /// Encoding label applied before hashing
        #[arg(short, long)]
        encoding: Option<String>,
    },
    /// Generate secure random text
    Random {
        /// Characters to draw from
        #[arg(long, conflicts_with = "preset")]
        charset: Option<String>,
        /// Named character set (alphanumeric, lowercase, uppercase, digits, hex, symbols)
        #[arg(long)]
        preset: Option<String>,
        /// Number of characters
        #[arg(short, long, allow_negative_numbers = true)]
        length: Option<i64>,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Text to convert
    #[arg(required_unless_present = "null", allow_hyphen_values = true)]
    text: Option<String>,
    /// Target type (i8..u64, f32, f64, bool, char, string, date, datetime)
    #[arg(short, long)]
    to: TypeKind,
    /// Culture name (e.g. en-US, de-DE)
    #[arg(long)]
    culture: Option<String>,
    /// Value returned when conversion fails
    #[arg(long)]
    default: Option<String>,
    /// Treat the input as absent
    #[arg(long, conflicts_with = "text")]
    null: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!("Textkit v{}", textkit::VERSION);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };

    match cli.command {
        Command::Convert(args) => {
            let culture = config.culture_or_default(args.culture.as_deref())?;
            let text = if args.null { None } else { args.text.as_deref() };

            let value = match args.default {
                Some(default) => {
                    let default = convert_dynamic(Some(&default), args.to, &culture)?;
                    convert_dynamic_or_default(text, &culture, default)
                }
                None => convert_dynamic(text, args.to, &culture)?,
            };
            println!("{}", value);
        }
        Command::Bytes {
            text,
            encoding,
            hex: as_hex,
        } => {
            let encoding = config.resolve_encoding(encoding.as_deref().unwrap_or("utf-8"))?;
            let bytes = to_byte_array(Some(&text), Some(encoding));
            if as_hex {
                println!("{}", hex::encode(bytes));
            } else {
                println!("{:?}", bytes);
            }
        }
        Command::Hash {
            text,
            algorithm,
            encoding,
        } => {
            let algorithm = algorithm.unwrap_or(config.hashing.algorithm);
            let label = encoding.unwrap_or_else(|| config.hashing.encoding.clone());
            let encoding = config.resolve_encoding(&label)?;
            println!("{}", compute_hash_hex(&text, algorithm, Some(encoding)));
        }
        Command::Random {
            charset: custom,
            preset,
            length,
        } => {
            let characters = match (custom, preset) {
                (Some(set), _) => set,
                (None, Some(name)) => charset::preset(&name)
                    .ok_or_else(|| format!("unknown character set preset '{name}'"))?
                    .to_owned(),
                (None, None) => config.generation.character_set.clone(),
            };
            let generator = RandomTextGenerator::from_os_entropy();
            let text = match length {
                Some(length) => generator.generate(&characters, length)?,
                None => {
                    let set = CharacterSet::new(&characters)?;
                    generator.generate_from(&set, config.generation.length)?
                }
            };
            println!("{}", text);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use textkit::generation::GenerationError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["textkit", "convert", "42", "--to", "i32"]).unwrap();
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.text.as_deref(), Some("42"));
                assert_eq!(args.to, TypeKind::I32);
                assert!(!args.null);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_convert_requires_text_or_null() {
        assert!(Cli::try_parse_from(["textkit", "convert", "--to", "bool"]).is_err());
        assert!(Cli::try_parse_from(["textkit", "convert", "--to", "bool", "--null"]).is_ok());
    }

    #[test]
    fn test_parse_hash_algorithm() {
        let cli = Cli::try_parse_from(["textkit", "-vv", "hash", "abc", "-a", "sha512"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Hash {
                algorithm: Some(HashAlgorithm::Sha512),
                ..
            }
        ));
    }

    #[test]
    fn test_random_rejects_charset_and_preset() {
        let result =
            Cli::try_parse_from(["textkit", "random", "--charset", "ab", "--preset", "hex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_random_negative_length() {
        let cli = Cli::try_parse_from(["textkit", "random", "--length", "-3"]).unwrap();
        let error = run(cli).unwrap_err();
        assert!(error.downcast_ref::<GenerationError>().is_some());
    }
}
