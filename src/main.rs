use clap::Parser;

use arrctl::cli::{self, Cli};
use arrctl::shared::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    logger::init_logger();

    let args = Cli::parse();
    cli::run(args).await?;
    Ok(())
}
