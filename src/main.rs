use clap::Parser;

use cinelist::cli::Cli;
use cinelist::config::ConfigLoader;
use cinelist::logger::init_logger;
use cinelist::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = ConfigLoader::new(cli.config.clone()).load()?;
    cli.apply_overrides(&mut settings);

    init_logger(&settings.logger)?;

    Server::new(settings).run().await
}
