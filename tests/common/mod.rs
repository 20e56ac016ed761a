#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use items_api::auth::{encode_token, Claims};
use items_api::items::ItemPermission;
use reqwest::StatusCode;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ITEMS_PATH: &str = "/api/menu/items";

/// A server process owned by one test; killed on drop
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn(extra_env: &[(&str, &str)]) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_items-api"));
        cmd.arg("serve")
            .arg("--port")
            .arg(port.to_string())
            .env("APP_ENV", "development")
            .env("JWT_SECRET", TEST_SECRET)
            .env("JWT_AUDIENCE", "")
            .env("JWT_ISSUER", "")
            .env("ITEMS_BASE_PATH", ITEMS_PATH)
            .env("ITEMS_SEED_SAMPLE_ITEMS", "true")
            .env("ITEMS_STRICT_CREATE_ERRORS", "false")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());
        for (key, value) in extra_env {
            cmd.env(key, value);
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn items_url(&self, suffix: &str) -> String {
        format!("{}{}{}", self.base_url, ITEMS_PATH, suffix)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub async fn start_server() -> Result<TestServer> {
    start_server_with(&[]).await
}

pub async fn start_server_with(extra_env: &[(&str, &str)]) -> Result<TestServer> {
    let server = TestServer::spawn(extra_env)?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Bearer token signed with the test secret
pub fn token(permissions: &[ItemPermission]) -> Result<String> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: "auth0|integration".to_string(),
        permissions: permissions.iter().map(|p| p.as_str().to_string()).collect(),
        aud: None,
        iss: None,
        exp: (now + chrono::Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    Ok(encode_token(&claims, TEST_SECRET)?)
}
