use clap::{Parser, Subcommand};
use schoolx_core::{Columns, Corpus, Normalizer, SearchEngine};
use schoolx_dataset::{load_records, DatasetSummary, DEFAULT_LOCALE_COLUMN};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Free-text search and statistics over tabular school records
#[derive(Parser, Debug)]
#[command(name = "schoolx")]
#[command(about = "Search and summarize school records", long_about = None)]
struct Args {
    /// Path to the school dataset CSV
    #[arg(short, long, default_value = "school_data.csv")]
    data: PathBuf,

    /// Column holding the school name
    #[arg(long, default_value = "SCHNAM05")]
    name_column: String,

    /// Column holding the city
    #[arg(long, default_value = "LCITY05")]
    city_column: String,

    /// Column holding the state
    #[arg(long, default_value = "LSTATE05")]
    state_column: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank schools by lexical similarity to a query string
    Search {
        /// Free-text query, e.g. "monroe elementary school ia"
        query: String,

        /// Number of closest matches to print
        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },
    /// Print aggregate statistics for the dataset
    Stats {
        /// Column holding the metro-centric locale code
        #[arg(long, default_value = DEFAULT_LOCALE_COLUMN)]
        locale_column: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SchoolX v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);

    let rows = load_records(&args.data)?;
    info!("Loaded {} rows", rows.len());

    let columns = Columns {
        name: args.name_column,
        city: args.city_column,
        state: args.state_column,
    };

    match args.command {
        Command::Search { query, limit } => {
            let normalizer = Normalizer::builtin();

            let start = Instant::now();
            let corpus = Arc::new(Corpus::build(&rows, &columns, &normalizer));
            info!(
                "Indexed {} records in {:.6} seconds ({} rows skipped)",
                corpus.len(),
                start.elapsed().as_secs_f64(),
                corpus.skipped_rows()
            );

            let engine = SearchEngine::with_normalizer(corpus, normalizer);

            let start = Instant::now();
            let results = engine.search_top_k(&query, limit);
            let elapsed = start.elapsed().as_secs_f64();

            println!("Results for '{}' (search took {:.6} seconds)", query, elapsed);
            for (rank, display) in results.iter().enumerate() {
                println!("{}) {}", rank + 1, display);
            }
        }
        Command::Stats { locale_column } => {
            let summary = DatasetSummary::from_rows(&rows, &columns, &locale_column)?;
            println!("{}", summary);
        }
    }

    Ok(())
}
