use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use lsline::{Config, Convention, OutputFormat};

#[derive(Parser)]
#[command(name = "lsline", about = "Parse FTP directory listings into file records")]
struct Cli {
    /// Listing file to read. Reads stdin when omitted.
    path: Option<PathBuf>,

    /// Listing convention (`enterprise-unix` or `unix`). Overrides the config file.
    #[arg(short, long)]
    convention: Option<Convention>,

    /// Print JSON lines instead of a table.
    #[arg(long)]
    json: bool,

    /// Resolve year-less timestamps as if today were this date (YYYY-MM-DD).
    #[arg(long)]
    reference_date: Option<chrono::NaiveDate>,

    /// Log field conversion failures and skipped lines to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not load config, using defaults");
        Config::defaults()
    });
    if let Some(convention) = cli.convention {
        config.parser.convention = convention;
    }
    if let Some(date) = cli.reference_date {
        config.parser.reference_date = Some(date);
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    let text = match &cli.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    tracing::debug!(convention = %config.parser.convention, "parsing listing");
    print!("{}", lsline::run(&config, &text)?);
    Ok(())
}
