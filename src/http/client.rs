use anyhow::{bail, Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// JSON HTTP client bound to one base URL
pub struct JsonClient {
    client: Client,
    base_url: String,
}

impl JsonClient {
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::ensure_success(response)
            .await?
            .json()
            .await
            .with_context(|| format!("Failed to decode response from {}", path))
    }

    /// `None` when the server answers 404
    pub async fn get_json_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self.send(self.request(Method::GET, path)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let data = Self::ensure_success(response)
            .await?
            .json()
            .await
            .with_context(|| format!("Failed to decode response from {}", path))?;
        Ok(Some(data))
    }

    pub async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<()> {
        let response = self.send(self.request(method, path).json(body)).await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    pub async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        let response = self.send(self.request(method, path)).await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.context("Failed to send request")
    }

    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        bail!("{} returned status {}: {}", url, status, body.trim());
    }
}
