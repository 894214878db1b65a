//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and driving them through
//! browser-like sessions that keep the session cookie between requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{header::LOCATION, redirect::Policy, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use warbler_api::{create_app, create_app_state};
use warbler_common::AppConfig;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Open a fresh session with its own cookie store
    ///
    /// Redirects are not followed so tests can inspect them.
    pub fn session(&self) -> Result<Session> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .redirect(Policy::none())
            .build()?;

        Ok(Session {
            base_url: self.base_url(),
            client,
        })
    }
}

/// One browser-like client of a [`TestServer`]
pub struct Session {
    base_url: String,
    client: Client,
}

impl Session {
    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with a URL-encoded form body
    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.post(&url).form(form).send().await?)
    }

    /// Make a POST request with an empty form body
    pub async fn post(&self, path: &str) -> Result<Response> {
        self.post_form(path, &[] as &[(&str, &str)]).await
    }
}

/// Create a test configuration
///
/// Uses the full environment when `SESSION_SECRET` is set, otherwise only
/// `DATABASE_URL` with a throwaway secret.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    if std::env::var("SESSION_SECRET").is_ok() {
        return AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e));
    }

    let database_url = std::env::var("DATABASE_URL")?;
    Ok(AppConfig::with_defaults(database_url, "integration-test-secret"))
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert a `302 Found` to the given location
pub async fn assert_found(response: Response, expected_location: &str) -> Result<()> {
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    assert_status(response, StatusCode::FOUND).await?;

    match location {
        Some(location) if location == expected_location => Ok(()),
        other => anyhow::bail!("Expected redirect to {}, got {:?}", expected_location, other),
    }
}
