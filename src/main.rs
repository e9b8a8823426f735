#[tokio::main]
async fn main() -> anyhow::Result<()> {
    glympse::run().await
}
