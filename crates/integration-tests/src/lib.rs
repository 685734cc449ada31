//! Integration tests for the grocery booking server.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations and start the server
//! cargo run -p grocery-cli -- migrate
//! cargo run -p grocery-server
//!
//! # Run integration tests
//! cargo test -p grocery-integration-tests -- --ignored
//! ```
//!
//! The server address is read from `GROCERY_BASE_URL`
//! (default `http://localhost:3000`).

use reqwest::Client;

/// Base URL for the server under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("GROCERY_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client plus the server address.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Build a context for the configured server.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: base_url(),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A name no other test run will use.
    #[must_use]
    pub fn unique_name(prefix: &str) -> String {
        format!("{prefix}-{}", uuid::Uuid::new_v4())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
