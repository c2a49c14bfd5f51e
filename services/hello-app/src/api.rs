//! Client for the hello endpoint
//!
//! The browser build talks to the server through `gloo-net`; native builds
//! have no fetch of their own and get [`OfflineClient`].

use async_trait::async_trait;

use crate::error::FetchError;

/// Endpoint queried by the API panel
pub const HELLO_URL: &str = "http://0.0.0.0:8001/api/hello";

/// Abstraction over the HTTP GET the panel performs
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait HelloClient {
    /// Fetch the hello endpoint and return the full body as text
    async fn fetch_hello(&self) -> crate::Result<String>;
}

/// Map a response status to an error unless it is in the 2xx range
pub fn check_status(status: u16) -> crate::Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

/// Browser client backed by the Fetch API
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct GlooHelloClient {
    url: String,
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
impl GlooHelloClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HelloClient for GlooHelloClient {
    async fn fetch_hello(&self) -> crate::Result<String> {
        tracing::debug!("GET {}", self.url);
        let resp = gloo_net::http::Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        check_status(resp.status())?;

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;
        tracing::debug!("GET {} -> {} ({} bytes)", self.url, resp.status(), body.len());
        Ok(body)
    }
}

/// Client for targets without a browser; every attempt fails
#[derive(Debug, Clone, Default)]
pub struct OfflineClient;

#[async_trait(?Send)]
impl HelloClient for OfflineClient {
    async fn fetch_hello(&self) -> crate::Result<String> {
        Err(FetchError::Network(
            "fetch is only available in the browser build".to_string(),
        ))
    }
}

/// Client used by the page on the current target
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub type PlatformClient = GlooHelloClient;

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
pub type PlatformClient = OfflineClient;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn platform_client() -> PlatformClient {
    GlooHelloClient::new(HELLO_URL)
}

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
pub fn platform_client() -> PlatformClient {
    OfflineClient
}
