use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;
use watcher_core::{Config, Method};

use crate::transport::{Request, Transport};
use crate::{ClientError, Result};

/// reqwest-backed transport talking to a single cluster URL.
pub struct HttpTransport {
    base_url: String,
    client: HttpClient,
    basic_auth: Option<(String, String)>,
}

impl HttpTransport {
    /// Create a transport for the given base URL with reqwest defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            client: HttpClient::new(),
            basic_auth: None,
        }
    }

    /// Build a transport honoring timeout, TLS and auth settings
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs));

        if config.insecure_skip_verify {
            tracing::warn!("TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if !config.ca_cert_path.is_empty() {
            let pem = std::fs::read(&config.ca_cert_path).map_err(|source| {
                ClientError::Certificate {
                    path: config.ca_cert_path.clone(),
                    source,
                }
            })?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }

        let transport = Self {
            base_url: normalize_base_url(config.base_url.clone()),
            client: builder.build()?,
            basic_auth: None,
        };

        Ok(match config.basic_auth() {
            Some((user, pass)) => transport.with_basic_auth(user, pass),
            None => transport,
        })
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(
        skip(self, request),
        fields(method = %request.method, path = %request.path, request_id = %Uuid::new_v4())
    )]
    async fn perform_request(&self, request: Request) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(http_method(request.method), &url);

        if !request.params.is_empty() {
            builder = builder.query(&request.params.to_pairs());
        }

        if let Some((user, pass)) = &self.basic_auth {
            builder = builder.basic_auth(user, Some(pass));
        }

        // Strings are treated as pre-serialized JSON
        builder = match request.body {
            Some(Value::String(raw)) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(raw),
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Watcher request failed");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
