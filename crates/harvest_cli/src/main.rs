//! One-shot batch harvester: loads the run configuration, drives the
//! pipeline over every configured site, and prints the summary.
mod config;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use harvest_engine::{FetchSettings, Pipeline, ReqwestFetcher};
use harvest_logging::{harvest_error, LogDestination};

const DEFAULT_CONFIG_PATH: &str = "harvest.ron";

fn main() -> ExitCode {
    harvest_logging::initialize(LogDestination::Terminal);

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match config::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            harvest_error!(
                "Failed to load configuration from {}: {err}",
                config_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    println!("Fetching content from: {}", config.base_url);
    println!("Output directory: {}", config.output_root.display());
    println!(
        "Target sites: {}",
        config
            .site_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let fetcher = match ReqwestFetcher::new(FetchSettings::default()) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            harvest_error!("Failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Everything runs sequentially; a current-thread runtime is all the
    // pipeline needs.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            harvest_error!("Failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = Pipeline::new(&fetcher, &config);
    let summary = runtime.block_on(pipeline.run());

    println!("\n{}", summary.render(&config.output_root));
    ExitCode::SUCCESS
}
