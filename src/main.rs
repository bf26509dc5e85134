//! Writes the Minecraft packet ID constants of one protocol version.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use packetid::{
    fetch::{self, Source},
    generate, DEFAULT_LOG_FILTER,
};

const DEFAULT_OUTPUT: &str = "packet_id.rs";

/// Generate packet ID constants from minecraft-data's protocol.json
#[derive(Parser)]
struct Args {
    /// Minecraft version to generate constants for.
    #[arg(long, value_name = "VERSION", default_value = fetch::DEFAULT_VERSION)]
    version: String,

    /// Download protocol.json from this URL instead of minecraft-data.
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read protocol.json from a local file instead of downloading it.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to write the generated constants to.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Args {
    fn source(&self) -> Source {
        match (&self.input, &self.url) {
            (Some(path), _) => Source::Local(path.clone()),
            (None, Some(url)) => Source::Remote(url.clone()),
            (None, None) => Source::for_version(&self.version),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("Generating {}", args.output.display());
    generate::generate(&args.source(), &args.version, &args.output)?;
    Ok(())
}
