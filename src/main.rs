//! Custdash main entry point

use clap::Parser;
use custdash_api::start_server;
use custdash_config::Config;
use custdash_core::Dataset;
use custdash_data::JsonFileSource;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "custdash")]
#[command(author = "Custdash Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight, self-hosted customer transaction dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = Config::load(args.config.clone())
            .expect("Failed to load configuration");

        eprintln!("[INFO] Config loaded: dataset file={}",
            config.dataset_path().to_string_lossy());

        let loader = Arc::new(JsonFileSource::default());
        let dataset = Arc::new(RwLock::new(Dataset::empty()));

        // Try to load the dataset if the file exists
        let data_path = config.dataset_path();
        eprintln!("[INFO] Looking for dataset file: {}", data_path.to_string_lossy());

        if data_path.exists() {
            eprintln!("[INFO] Dataset file found, loading...");
            match Dataset::load(loader.clone(), data_path).await {
                Ok(loaded) => {
                    eprintln!("[INFO] Dataset loaded: {} customers, {} transactions",
                        loaded.customers_count(), loaded.transactions_count());
                    *dataset.write().await = loaded;
                }
                Err(e) => eprintln!("[ERROR] Failed to load dataset: {:?}", e),
            }
        } else {
            eprintln!("[WARN] Dataset file not found: {}", data_path.display());
        }

        start_server(config, dataset, loader).await
    });

    Ok(())
}
