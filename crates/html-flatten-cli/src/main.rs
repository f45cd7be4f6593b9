//! Command-line front end for the `html-flatten` engine.
//!
//! Reads HTML from a file or stdin and prints either the flattened text or
//! the full annotated result as JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use html_flatten::{DocumentContent, FlattenOptions, flatten_html};
use thiserror::Error;
use url::Url;

#[derive(Debug, Parser)]
#[command(
    name = "html-flatten",
    version,
    about = "Flatten HTML into plain text with tag span annotations"
)]
struct Cli {
    /// Input HTML file; `-` or nothing reads stdin.
    input: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum line width for word wrapping.
    #[arg(long, default_value_t = html_flatten::options::DEFAULT_WRAP_WIDTH)]
    width: usize,

    /// Base URL used to resolve relative link targets.
    #[arg(long)]
    base_url: Option<Url>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The flattened text only.
    Text,
    /// The full result (text plus tags) as pretty JSON.
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Flatten(#[from] html_flatten::FlattenError),
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("html-flatten: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let bytes = read_input(cli.input.as_deref())?;
    let html = decode(&bytes);

    let mut options = FlattenOptions::default().with_wrap_width(cli.width);
    if let Some(base_url) = &cli.base_url {
        options = options.with_base_url(base_url.clone());
    }
    let content = flatten_html(&html, &options)?;

    let rendered = render(&content, cli.format)?;
    write_output(cli.output.as_deref(), &rendered)?;
    Ok(())
}

fn read_input(input: Option<&Path>) -> io::Result<Vec<u8>> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read(path),
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

/// Decodes input bytes with BOM sniffing, falling back to lossy UTF-8.
fn decode(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
    text.into_owned()
}

fn render(content: &DocumentContent, format: Format) -> Result<String, CliError> {
    let mut rendered = match format {
        Format::Text => content.text.clone(),
        Format::Json => serde_json::to_string_pretty(content)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

fn write_output(output: Option<&Path>, rendered: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, rendered),
        None => io::stdout().write_all(rendered.as_bytes()),
    }
}
