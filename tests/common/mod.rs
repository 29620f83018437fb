use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use airplane_api::app::{app, AppState};
use airplane_api::config::AppConfig;
use airplane_api::database::{AirplaneStore, MemoryAirplaneStore};

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Serve the router on a free port backed by a fresh in-memory store.
/// The server task lives as long as the calling test's runtime.
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(Arc::new(MemoryAirplaneStore::new())).await
}

pub async fn spawn_server_with(store: Arc<dyn AirplaneStore>) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let config = AppConfig::development();

    let state = AppState::new(store);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test port")?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app(state, &config)).await;
    });

    let server = TestServer {
        base_url,
        client: reqwest::Client::new(),
    };
    server.wait_ready(Duration::from_secs(5)).await?;
    Ok(server)
}
