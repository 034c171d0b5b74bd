use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use translation_agency::{GigaChatClient, GigaChatConfig, TranslationAgency};

#[derive(Parser)]
#[command(name = "translation-agency")]
#[command(author, version, about = "English-to-Russian literary translation pipeline", long_about = None)]
struct Cli {
    /// Input file with the English text (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the final Russian text (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the model used by every stage
    #[arg(long)]
    model: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = GigaChatConfig::from_env()?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let text = read_input(cli.input.as_deref())?;
    info!("Read {} characters of input", text.chars().count());

    let agency = TranslationAgency::with_default_agents(GigaChatClient::new(config)?);
    let result = agency.translate(&text).await?;

    write_output(cli.output.as_deref(), &result)?;
    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Read the source text from a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write the result to a file, or stdout when no path is given
fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {:?}", path)),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_helpers_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");

        std::fs::write(&input, "The sea was calm.").unwrap();
        assert_eq!(read_input(Some(&input)).unwrap(), "The sea was calm.");

        write_output(Some(&output), "Море было спокойно.").unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Море было спокойно."
        );
    }

    #[test]
    fn test_read_input_missing_file_mentions_path() {
        let err = read_input(Some(Path::new("/nonexistent/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("input.txt"));
    }
}
