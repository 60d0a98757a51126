//! CLI Tool Example
//!
//! This example demonstrates how to build a command-line tool around sheetdigest.
//! It reads a saved clipboard HTML snapshot from a file (or stdin) and prints the digest.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example cli_tool -- clipboard.html
//! pbpaste -Prefer html | cargo run --example cli_tool -- --format text --headers
//! RUST_LOG=sheetdigest=debug cargo run --example cli_tool -- clipboard.html --simple
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use futures::executor::block_on;
use sheetdigest::{
    paste_and_format, ClipboardSource, DigestBuilder, DigestOptions, Digester, LinkPolicy,
    OutputFormat, ReaderClipboard, SheetDigestError,
};

/// Output flavor selected on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Text => OutputFormat::PlainText,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Format spreadsheet rows copied as HTML into a paste-ready digest
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Saved clipboard HTML (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Hide bracketed "[...]" title prefixes
    #[arg(long)]
    no_prefix: bool,

    /// Only consider the sub and official link columns
    #[arg(long)]
    simple: bool,

    /// Emit a heading for every category (config may enable it too)
    #[arg(long)]
    headers: bool,

    /// Output flavor (defaults to the config file's, then html)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// JSON file with digest options (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL for resolving relative links
    #[arg(long)]
    base_url: Option<String>,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        handle_error(e);
        process::exit(1);
    }
}

/// Builds the digester from the config file, then applies only the flags actually given
fn build_digester(cli: &Cli) -> Result<Digester, SheetDigestError> {
    let options = match &cli.config {
        Some(path) => DigestOptions::from_json_reader(File::open(path)?)?,
        None => DigestOptions::default(),
    };

    let mut builder = DigestBuilder::from_options(options);
    if cli.headers {
        builder = builder.with_category_headers(true);
    }
    if let Some(format) = cli.format {
        builder = builder.with_output_format(format.into());
    }
    if cli.no_prefix {
        builder = builder.with_show_prefix(false);
    }
    if cli.simple {
        builder = builder.with_link_policy(LinkPolicy::Simple);
    }
    if let Some(base_url) = &cli.base_url {
        builder = builder.with_base_url(base_url.clone());
    }
    builder.build()
}

fn run(cli: &Cli) -> Result<(), SheetDigestError> {
    let digester = build_digester(cli)?;

    let input: Box<dyn Read + Send> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut clipboard =
        ReaderClipboard::new(input).with_max_input_size(digester.options().max_input_size);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match digester.options().output_format {
        OutputFormat::Json => {
            let html = block_on(clipboard.read_html())?.ok_or(SheetDigestError::NoHtmlContent)?;
            let digest = digester.digest_markup(&html)?;
            digester.render_as(&digest, OutputFormat::Json, &mut handle)?;
        }
        format => {
            let payload = block_on(paste_and_format(&digester, &mut clipboard))?;
            let body = if format == OutputFormat::PlainText {
                payload.text
            } else {
                payload.html
            };
            handle.write_all(body.as_bytes())?;
        }
    }

    writeln!(handle)?;
    handle.flush()?;
    Ok(())
}

fn handle_error(error: SheetDigestError) {
    eprintln!("{}", error.notice());
    match error {
        SheetDigestError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check the config file and the --base-url value.");
        }
        SheetDigestError::Serialization(err) => {
            eprintln!("Config Parse Error: {}", err);
        }
        SheetDigestError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
        }
        SheetDigestError::Io(err) => {
            eprintln!("I/O Error: {}", err);
        }
        SheetDigestError::ClipboardUnavailable(msg) | SheetDigestError::ClipboardWrite(msg) => {
            eprintln!("  {}", msg);
        }
        SheetDigestError::NoHtmlContent | SheetDigestError::NothingToFormat => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const MUSIC_TABLE: &str = "<table><tr><td></td><td>2024-05-01</td><td>Song</td>\
        <td>Music</td><td></td><td></td><td></td><td></td><td>None</td></tr></table>";

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_settings_apply_without_flags() {
        let config = config_file(r#"{"category_headers": true, "output_format": "plain_text"}"#);
        let path = config.path().to_str().unwrap();
        let cli = Cli::parse_from(["cli_tool", "--config", path]);

        let digester = build_digester(&cli).unwrap();
        assert!(digester.options().category_headers);
        assert_eq!(digester.options().output_format, OutputFormat::PlainText);

        let text = digester.convert_to_string(MUSIC_TABLE).unwrap();
        assert!(text.starts_with("## Music\n"), "got {:?}", text);
    }

    #[test]
    fn test_flags_override_config() {
        let config = config_file(r#"{"output_format": "plain_text", "show_prefix": true}"#);
        let path = config.path().to_str().unwrap();
        let cli = Cli::parse_from(["cli_tool", "--config", path, "--format", "json", "--no-prefix"]);

        let digester = build_digester(&cli).unwrap();
        assert_eq!(digester.options().output_format, OutputFormat::Json);
        assert!(!digester.options().show_prefix);
        assert!(!digester.options().category_headers);
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = Cli::parse_from(["cli_tool"]);
        let digester = build_digester(&cli).unwrap();
        assert_eq!(digester.options().output_format, OutputFormat::Html);
        assert!(!digester.options().category_headers);
    }
}
