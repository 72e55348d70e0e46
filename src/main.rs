use anyhow::Result;

use kotboard::board;
use kotboard::services::config::Config;
use kotboard::services::orders::OrderClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    // Logs go to stderr so they cannot corrupt the repainted screen.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    board::run(OrderClient::new(config.base_url)).await
}
