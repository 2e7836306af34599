// gpsearch - search Go packages from the command line.
// Parses arguments, loads configuration, and prints the ranked listing.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use gpsearch::config::Config;
use gpsearch::rank::{DEFAULT_SORT_FIELD, SortSpec};
use gpsearch::{FingerprintCache, Orchestrator, QueryOptions, Result, SearchClient, logging};

const FIELDS_HELP: &str = "\
Fields supported:
    name        : The name
    path        : The import path
    synopsis    : The description
    import_count: Num. of projects using/importing this
    stars       : Num. of github stars
    score       : How well is the document
    fork        : If this is a forked repository

Notes: Some packages only have few fields with data";

#[derive(Parser, Debug)]
#[command(name = "gpsearch", version)]
#[command(about = "Search golang packages from the command line")]
#[command(after_help = FIELDS_HELP)]
struct Cli {
    /// Field to sort packages by
    #[arg(short, long, default_value = DEFAULT_SORT_FIELD)]
    sort: String,

    /// Reverse the sort result
    #[arg(short, long)]
    reverse: bool,

    /// Num. of packages to list
    #[arg(short, long, default_value_t = gpsearch::query::DEFAULT_LIMIT)]
    num: usize,

    /// Package fields to show, repeat for multiple: -f path -f stars
    #[arg(short, long = "fields", default_values = ["path", "import_count", "synopsis"])]
    fields: Vec<String>,

    /// Log cache and request activity to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Search terms
    #[arg(required = true, num_args = 1..)]
    terms: Vec<String>,
}

impl Cli {
    fn query(&self) -> String {
        self.terms.join(" ")
    }

    fn options(&self) -> QueryOptions {
        QueryOptions {
            sort: SortSpec::new(&self.sort, self.reverse),
            fields: self.fields.clone(),
            limit: self.num,
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env();
    let cache = FingerprintCache::new(config.cache)?;
    let client = SearchClient::new(config.endpoint)?;
    let orchestrator = Orchestrator::new(cache, client);

    let listing = orchestrator.execute(&cli.query(), &cli.options()).await?;
    if let Some(notice) = listing.truncation_notice() {
        println!("{}", notice);
    }
    print!("{}", listing);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "query failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
