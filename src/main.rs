//! Codematch CLI entrypoint.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mimalloc::MiMalloc;

use codematch::catalog::CatalogSource;
use codematch::config::Config;
use codematch::matching::MatchEngine;
use codematch::report::{MatchReport, write_csv};
use codematch::{LexiconAnnotator, LexiconConfig, OpenCodelistsClient, load_bundles};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON report with run metadata.
    Json,
    /// Flat CSV row table.
    Csv,
}

/// Rank bundles against the OpenCodelists catalog.
#[derive(Debug, Parser)]
#[command(name = "codematch", version, about)]
struct Cli {
    /// Organisation whose codelist catalog to match against.
    organisation: String,

    /// CSV file of bundles (columns: bundle_id, bundle_name).
    #[arg(long)]
    bundles: PathBuf,

    /// Output file; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Shortlist size per ranking axis (overrides CODEMATCH_TOP_N).
    #[arg(long)]
    top_n: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(top_n) = cli.top_n {
        config.top_n = top_n;
    }
    config.validate()?;

    tracing::info!(
        organisation = %cli.organisation,
        bundles = %cli.bundles.display(),
        top_n = config.top_n,
        "Codematch starting"
    );

    let annotator = match &config.lexicon_path {
        Some(path) => LexiconAnnotator::load(LexiconConfig::new(path))
            .with_context(|| format!("loading lexicon from {}", path.display()))?,
        None => {
            tracing::warn!("No CODEMATCH_LEXICON_PATH configured, running annotator in stub mode");
            LexiconAnnotator::stub()
        }
    };

    let bundles = load_bundles(&cli.bundles)
        .with_context(|| format!("loading bundles from {}", cli.bundles.display()))?;

    let client = OpenCodelistsClient::with_base_url(&config.api_url, config.http_timeout());
    let codelists = client
        .fetch_codelists(&cli.organisation)
        .await
        .context("fetching codelist catalog")?;

    let engine = MatchEngine::with_top_n(annotator, config.top_n);
    let results = engine.run(&bundles, &codelists);

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        OutputFormat::Json => {
            let report = MatchReport::new(
                cli.organisation.clone(),
                bundles.len(),
                codelists.len(),
                results,
            );
            report.write_json(&mut writer)?;
        }
        OutputFormat::Csv => {
            write_csv(&results, &mut writer)?;
        }
    }

    tracing::info!("Codematch run complete");
    Ok(())
}
