//! Spacehide - hide encrypted data in a document's whitespace
//!
//! CLI wiring around the library: key generation, encoding, decoding.
//! Carriers and keys are loaded from files here; the codec itself only ever
//! sees already-loaded values.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use spacehide::crypto::{load_public_key, load_secret_key, KeyPair};
use spacehide::{SealedBox, Stego};

/// Spacehide - hide encrypted data in a document's whitespace
///
/// Encrypts a message and splices the ciphertext into the whitespace of a
/// text carrier. The carrier's visible content is unchanged; the modified
/// document must reach the recipient with its whitespace bytes intact.
#[derive(Parser)]
#[command(name = "spacehide")]
#[command(version)]
#[command(about = "Hide encrypted payloads in the whitespace of a text carrier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new X25519 key pair
    Keygen {
        /// Output path for keys (creates .pub and .key files)
        #[arg(short, long, default_value = "spacehide")]
        output: PathBuf,
    },

    /// Hide a message inside a carrier document's whitespace
    ///
    /// The encoded document is printed to stdout unless --output is given.
    /// Redirect or save it exactly as produced: the payload lives in the
    /// whitespace bytes, and any reformatting destroys it.
    Encode {
        /// Path to the carrier document (e.g. an HTML file)
        #[arg(short, long)]
        carrier: PathBuf,

        /// Text message to hide (reads from stdin if neither --message nor --file is given)
        #[arg(short, long, conflicts_with = "file")]
        message: Option<String>,

        /// Binary file to hide instead of a text message
        #[arg(short, long, conflicts_with = "message")]
        file: Option<PathBuf>,

        /// Path to the recipient's public key
        #[arg(short, long)]
        key: PathBuf,

        /// Write the encoded carrier here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recover a hidden message from an encoded carrier
    Decode {
        /// Path to the encoded carrier document
        #[arg(short, long)]
        carrier: PathBuf,

        /// Path to your private key
        #[arg(short, long)]
        key: PathBuf,

        /// Write raw decoded bytes here instead of printing text to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen { output } => keygen(&output),

        Commands::Encode {
            carrier,
            message,
            file,
            key,
            output,
        } => encode_cmd(&carrier, message, file.as_deref(), &key, output.as_deref()),

        Commands::Decode {
            carrier,
            key,
            output,
        } => decode_cmd(&carrier, &key, output.as_deref()),
    }
}

/// Generates a new key pair and saves it to files.
fn keygen(output: &Path) -> Result<()> {
    let keypair = KeyPair::generate();
    keypair
        .save_to_files(output)
        .context("Failed to save key pair")?;

    println!("Key pair generated successfully:");
    println!("  Public key:  {}", output.with_extension("pub").display());
    println!("  Private key: {}", output.with_extension("key").display());
    println!();
    println!("Share the public key with anyone who wants to send you hidden messages.");
    println!("Keep the private key secret and secure.");

    Ok(())
}

/// Encrypts a message or file and hides it in the carrier's whitespace.
fn encode_cmd(
    carrier_path: &Path,
    message: Option<String>,
    file: Option<&Path>,
    key_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let carrier = std::fs::read_to_string(carrier_path)
        .with_context(|| format!("Failed to read carrier from {}", carrier_path.display()))?;

    let public_key = load_public_key(key_path)
        .with_context(|| format!("Failed to load public key from {}", key_path.display()))?;

    let payload: Vec<u8> = if let Some(file_path) = file {
        std::fs::read(file_path)
            .with_context(|| format!("Failed to read file {}", file_path.display()))?
    } else {
        match message {
            Some(m) => m.into_bytes(),
            None => {
                eprintln!("Reading message from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read message from stdin")?;
                buffer.trim().to_string().into_bytes()
            }
        }
    };

    if payload.is_empty() {
        anyhow::bail!("Message cannot be empty");
    }

    let stego = Stego::new(SealedBox);
    let encoded = stego
        .encode(&public_key, &payload, &carrier)
        .context("Failed to encode message")?;

    match output {
        Some(path) => {
            std::fs::write(path, &encoded)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Encoded carrier written to {}", path.display());
        }
        None => print!("{}", encoded),
    }

    Ok(())
}

/// Recovers and decrypts the payload hidden in an encoded carrier.
fn decode_cmd(carrier_path: &Path, key_path: &Path, output: Option<&Path>) -> Result<()> {
    let carrier = std::fs::read_to_string(carrier_path)
        .with_context(|| format!("Failed to read carrier from {}", carrier_path.display()))?;

    let secret_key = load_secret_key(key_path)
        .with_context(|| format!("Failed to load private key from {}", key_path.display()))?;

    let stego = Stego::new(SealedBox);
    let decoded = stego
        .decode(&secret_key, &carrier)
        .context("Failed to decode carrier")?;

    match output {
        Some(path) => {
            std::fs::write(path, &decoded)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Decoded {} bytes to {}", decoded.len(), path.display());
        }
        None => println!("{}", String::from_utf8_lossy(&decoded)),
    }

    Ok(())
}
