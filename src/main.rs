use anyhow::bail;
use clap::Parser;
use log::info;

use wknd_headless::admin;
use wknd_headless::adventures::AdventureClient;
use wknd_headless::conf::Config;
use wknd_headless::core::{setup_logging, CliArgs, Command};
use wknd_headless::query::QueryExecutor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Fetch { path, slug } => {
            let executor = QueryExecutor::publish(config.aem);
            info!("fetching from {}", executor.host());
            let client = AdventureClient::new(executor);

            let adventure = match (path, slug) {
                (Some(path), _) => client.by_path(&path).await?,
                (None, Some(slug)) => client.by_slug(&slug).await?,
                (None, None) => bail!("either --path or --slug is required"),
            };

            match adventure {
                Some(adventure) => println!("{}", serde_json::to_string_pretty(&adventure)?),
                None => eprintln!("no adventure found"),
            }
        }
        Command::ClearCache => {
            admin::purge_cache(&config.admin).await?;
        }
    }

    Ok(())
}
