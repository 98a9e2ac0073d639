use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vigenere_analysis::{normalize, Ciphertext, FrequencyModel, KeyLengthSearch, NO_KEY, NO_MESSAGE};

/// Command-line arguments for the Vigenère breaker.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file (uses the built-in sample if omitted)")]
    file: Option<String>,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    #[arg(short, long, help = "Minimum score a shift must exceed to be accepted")]
    threshold: Option<f64>,

    #[arg(short, long, help = "Only try this key length")]
    key_length: Option<usize>,

    #[arg(short, long, help = "Largest key length to try")]
    max_key_length: Option<usize>,
}

const SAMPLE_CIPHERTEXT: &str = concat!(
    "KCCPKBGUFDPHQTYAVINRRTMVGRKDNBVFDETDGILTXRGUDDKOTFMBPV",
    "GEGLTGCKQRACQCWDNAWCRXIZAKFTLEWRPTYCQKYVXCHKFTPONCQQRHJVAJUWETMCMSPKQDYH",
    "JVDAHCTRLSVSKCGCZQQDZXGSFRLSWCWSJTBHAFSIASPRJAHKJRJUMVGKMITZHFPDISPZLVLG",
    "WTFPLKKEBDPGCEBSHCTJRWXBAFSPEZQNRWXCVYCGAONWDDKACKAWBBIKFTIOVKCGGHJVLNHI",
    "FFSQESVYCLACNVRWBBIREPBBVFEXOSCDYGZWPFDTKFQIYCWHJVLNHIQIBTKHJVNPIST",
);

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli: Cli = Cli::parse();

    let input: String = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?,
        None => SAMPLE_CIPHERTEXT.to_string(),
    };

    let ciphertext = clean_input(&input)?;

    if ciphertext.len() < 50 {
        warn!(length = ciphertext.len(), "text may be too short for reliable analysis");
    }

    let search = build_search(&cli)?;
    let (plaintext, key) = recover(&search, &ciphertext, cli.key_length)?;

    print!("{}", render_report(&ciphertext, &key, &plaintext));

    if let Some(path) = &cli.output {
        std::fs::write(path, &plaintext)
            .with_context(|| format!("Failed to write output file {}", path))?;
    }

    Ok(())
}

/// Keeps only letters, uppercased, and validates what is left
fn clean_input(input: &str) -> Result<Ciphertext> {
    Ciphertext::parse(&normalize(input)).context("Input contains no usable ciphertext")
}

/// Builds the search from the command-line overrides
fn build_search(cli: &Cli) -> Result<KeyLengthSearch> {
    let mut model = FrequencyModel::english();
    if let Some(threshold) = cli.threshold {
        model = model.with_threshold(threshold)?;
    }

    let mut search = KeyLengthSearch::new(model);
    if let Some(max) = cli.max_key_length {
        search = search.with_max_key_length(max);
    }

    Ok(search)
}

/// Runs the search and returns `(plaintext, key)`, or the sentinel pair.
fn recover(
    search: &KeyLengthSearch,
    ciphertext: &Ciphertext,
    key_length: Option<usize>,
) -> Result<(String, String)> {
    let found = match key_length {
        Some(key_length) => search.search_with_key_length(ciphertext, key_length)?,
        None => search.search(ciphertext),
    };

    Ok(match found {
        Some(decryption) => {
            info!(key_length = decryption.key_length, scores = ?decryption.scores, "key recovered");
            (decryption.plaintext, decryption.key)
        }
        None => (NO_MESSAGE.to_string(), NO_KEY.to_string()),
    })
}

fn render_report(ciphertext: &Ciphertext, key: &str, plaintext: &str) -> String {
    format!(
        "Encrypted Message:\n{}\nKey:\n{}\nDecrypted Message:\n{}\n",
        ciphertext, key, plaintext
    )
}
