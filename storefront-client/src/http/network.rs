// storefront-client/src/http/network.rs
// Network gateway over reqwest

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::HeaderValue;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::{HttpGateway, decode_body};
use crate::{ClientConfig, ClientError, ClientResult};

/// Network HTTP gateway
///
/// Keeps a cookie jar for the lifetime of the client, so session cookies
/// set by the server are sent back on every later call.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("invalid base url {base_url:?}: {e}")))?;

        // Configured cookies share the jar with the ones the server sets,
        // so both go out on every request.
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.cookie {
            HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::Config(format!("invalid cookie: {e}")))?;
            for pair in cookie.split(';').map(str::trim).filter(|p| !p.is_empty()) {
                jar.add_cookie_str(pair, &origin);
            }
        }

        let mut builder = Client::builder().cookie_provider(jar);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Base origin every path is joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_body(status, &body)
    }
}

#[async_trait]
impl HttpGateway for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        self.execute(self.client.post(self.url(path)).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "POST (no body)");
        self.execute(
            self.client
                .post(self.url(path))
                .header(reqwest::header::CONTENT_TYPE, "application/json"),
        )
        .await
    }
}
