use anyhow::Result;
use zitta_bot::{Credentials, Session};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let credentials = Credentials::from_env();
    let mut session = Session::new(credentials).await?;
    session.run().await
}
