use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use regionclust::{
    AnchorChoice, RefSequence, RegionClustering, RunConfig, StoreRegistry, TrackName, load_bed,
    load_bedgraph,
};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, info};

/// Cluster signal heatmaps built around annotated anchor features
#[derive(Parser, Debug)]
#[command(name = "regionclust", version, about)]
struct Cli {
    /// Display store as NAME=PATH to a bedGraph file; repeat in row order
    #[arg(long = "display", value_name = "NAME=PATH", value_parser = parse_pair, required = true)]
    display: Vec<(String, String)>,

    /// Region store as NAME=PATH to a BED file with strands
    #[arg(long = "regions", value_name = "NAME=PATH", value_parser = parse_pair, required = true)]
    regions: Vec<(String, String)>,

    /// Reference sequence to cluster on
    #[arg(long)]
    sequence: String,

    /// Length of the reference sequence in bp
    #[arg(long)]
    sequence_length: i64,

    /// JSON run configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of bins per heatmap row
    #[arg(long)]
    bins: Option<usize>,

    /// Length of queried regions in bp
    #[arg(long)]
    query_length: Option<u32>,

    /// Number of clusters (defaults to sqrt(n/2))
    #[arg(long)]
    clusters: Option<usize>,

    /// Which end of each anchor to center on
    #[arg(long, value_enum)]
    anchor: Option<AnchorArg>,

    /// Row label as STORE=LABEL; repeat for several tracks on one store
    #[arg(long = "track", value_name = "STORE=LABEL", value_parser = parse_pair)]
    tracks: Vec<(String, String)>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_iterations: Option<usize>,

    /// Write the JSON result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging (-v debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AnchorArg {
    /// 5' end
    Start,
    /// 3' end
    End,
}

impl From<AnchorArg> for AnchorChoice {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Start => AnchorChoice::UseStart,
            AnchorArg::End => AnchorChoice::UseEnd,
        }
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::WARN
    } else if cli.verbose > 0 {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();
    let config = build_config(&cli)?;
    let sequence = RefSequence::new(&cli.sequence, cli.sequence_length);

    // Step 1: Load stores
    let step1_start = Instant::now();
    let mut registry = StoreRegistry::new();
    for (name, path) in &cli.display {
        let store = load_bedgraph(name, open(path)?, &cli.sequence)
            .with_context(|| format!("Failed to load display store '{}' from {}", name, path))?;
        info!(store = %name, features = store.feature_count(), "loaded display store");
        registry.register(store);
    }
    for (name, path) in &cli.regions {
        let store = load_bed(name, open(path)?, &cli.sequence)
            .with_context(|| format!("Failed to load region store '{}' from {}", name, path))?;
        info!(store = %name, features = store.feature_count(), "loaded region store");
        registry.register(store);
    }
    info!(
        stores = registry.store_count(),
        secs = step1_start.elapsed().as_secs_f64(),
        "stores loaded"
    );

    // Step 2: Cluster
    let step2_start = Instant::now();
    let outcome = RegionClustering::new(config, sequence, registry)
        .run()
        .await
        .context("Clustering failed")?;
    info!(
        clusters = outcome.clusters.len(),
        heatmaps = outcome.summary.heatmaps_built,
        skipped_anchors = outcome.summary.anchors_skipped,
        failed_anchor_scans = outcome.summary.failed_anchor_scans(),
        failed_heatmaps = outcome.summary.heatmaps_failed,
        secs = step2_start.elapsed().as_secs_f64(),
        "clustering complete"
    );

    // Step 3: Write result
    let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize result")?;
    match &cli.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write result")?;
        }
    }

    info!(secs = start_time.elapsed().as_secs_f64(), "done");
    Ok(())
}

/// Layer flags over the optional JSON config
fn build_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    config.display_stores = cli.display.iter().map(|(name, _)| name.clone()).collect();
    config.region_stores = cli.regions.iter().map(|(name, _)| name.clone()).collect();

    if let Some(bins) = cli.bins {
        config.num_of_bins = bins;
    }
    if let Some(len) = cli.query_length {
        config.query_length = len;
    }
    if cli.clusters.is_some() {
        config.num_clusters = cli.clusters;
    }
    if let Some(anchor) = cli.anchor {
        config.anchor_choice = anchor.into();
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(iters) = cli.max_iterations {
        config.max_iterations = iters;
    }
    if !cli.tracks.is_empty() {
        config.track_names = cli
            .tracks
            .iter()
            .map(|(store, track)| TrackName {
                store: store.clone(),
                track: track.clone(),
            })
            .collect();
    }

    Ok(config)
}

fn open(path: &str) -> Result<BufReader<File>> {
    let file = File::open(Path::new(path)).with_context(|| format!("Failed to open {}", path))?;
    Ok(BufReader::new(file))
}
