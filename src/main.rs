use clap::Parser;
use tracing_subscriber::EnvFilter;

use airplane_api::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("airplane_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = airplane_api::cli::run(cli).await {
        match std::env::var("AIRPLANE_API_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
