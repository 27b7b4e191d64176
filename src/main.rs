use anyhow::Result;
use greenroom::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
