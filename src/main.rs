use anyhow::Result;
use booklist::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
