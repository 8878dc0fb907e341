#[tokio::main]
async fn main() -> anyhow::Result<()> {
    casegen_server::start().await
}
