/// Hi-Res Checker - find higher-resolution versions of a FLAC library
use anyhow::Context;
use clap::Parser;
use hires_catalog::MoraProvider;
use hires_checker::{logging, Checker, CheckerConfig};
use hires_metadata::{LibraryScanner, ParserRegistry};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hires-checker")]
#[command(version, about = "Report FLAC tracks available in higher resolution", long_about = None)]
struct Cli {
    /// Directory containing the FLAC files to scan
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Output log file [default: result.log]
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CheckerConfig::load(cli.config.as_deref())?;
    config.apply_cli(cli.path, cli.log);
    config.validate()?;

    logging::init(&config.log)?;

    if let Err(e) = run(&config).await {
        tracing::error!(error = %format!("{e:#}"), "hires-checker failed");
        return Err(e);
    }

    Ok(())
}

async fn run(config: &CheckerConfig) -> anyhow::Result<()> {
    let root = config.root()?;

    let provider =
        MoraProvider::new(config.catalog_config()).context("Failed to create catalog provider")?;
    let scanner =
        LibraryScanner::new(ParserRegistry::new()).follow_links(config.scan.follow_links);

    let checker = Checker::new(scanner, provider);
    let summary = checker
        .run(root)
        .await
        .with_context(|| format!("Check of {} failed", root.display()))?;

    tracing::info!(
        tracks = summary.tracks,
        upgraded = summary.upgraded,
        candidates = summary.candidates,
        log = %config.log.file.display(),
        "Check complete"
    );

    Ok(())
}
