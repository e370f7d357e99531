#[tokio::main]
async fn main() -> anyhow::Result<()> {
    langgen_cli::run().await
}
