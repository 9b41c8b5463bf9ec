#[tokio::main]
async fn main() -> anyhow::Result<()> {
    citizen_ai_server::start().await
}
