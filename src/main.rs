mod aggregator;
mod cli;
mod client;
mod config;
mod dto;
mod extractor;
mod reader;
mod server;
mod source;

use clap::Parser;

use cli::{Cli, Commands};
use config::{ClientConfig, ReaderConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            min_duration,
            languages,
            proxy,
        } => {
            let config = ReaderConfig {
                languages,
                min_duration,
                proxy,
            };
            server::run_server(host, port, config).await
        }
        Commands::Fetch {
            ytlinks,
            server_url,
        } => {
            let config = ClientConfig::new(server_url, ytlinks);
            if client::run_client(config).await.is_err() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
