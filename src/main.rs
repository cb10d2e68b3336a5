use clap::Parser;
use log::error;

use quote_scraper::app;
use quote_scraper::cli::Cli;

#[tokio::main]
async fn main() {
    init_logger();

    let cli = Cli::parse();
    if let Err(err) = app::run(cli).await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
