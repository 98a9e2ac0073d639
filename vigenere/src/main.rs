use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vigenere_analysis::{decrypt, encrypt, normalize};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
///
/// Input is reduced to uppercase letters first, so the output is always a
/// contiguous run of A-Z that the breaker can consume directly.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;
    let text = normalize(&content);
    let key = cli.key.to_ascii_uppercase();

    let result = match cli.mode {
        OperationMode::Encrypt => {
            info!(key = %key, letters = text.len(), "encrypting");
            encrypt(&text, &key)?
        }
        OperationMode::Decrypt => {
            info!(key = %key, letters = text.len(), "decrypting");
            decrypt(&text, &key)?
        }
    };

    std::fs::write(&cli.output, &result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}
