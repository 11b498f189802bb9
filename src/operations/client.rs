// Device Client
// Fire-and-forget GET/POST round trips against one list's endpoint pair

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::core::device_config::ListEndpoints;

/// Errors a device round trip can surface
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("device answered {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Completion messages posted back into the event loop when a spawned
/// request finishes. There is no cancellation and no timeout; whenever
/// a response arrives, its message is delivered.
#[derive(Debug)]
pub enum NetMessage {
    /// Load finished with a list body
    Loaded(String),

    /// Load failed; the in-memory list stays untouched
    LoadFailed(String),

    /// Save finished; the text is shown verbatim whatever it says
    Saved(String),
}

/// HTTP client bound to one device and one list
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: Client,
    base_url: String,
    endpoints: ListEndpoints,
}

impl DeviceClient {
    pub fn new(base_url: &str, endpoints: ListEndpoints) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to create device HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET the full list from the load endpoint
    pub async fn load(&self) -> Result<String, ClientError> {
        let url = self.url(&self.endpoints.load_path);
        debug!("loading list from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok(body)
    }

    /// POST the full list to the save endpoint and return the device's
    /// status text. The body is the same CRLF-joined plain text the
    /// device serves, and the content type says so.
    pub async fn save(&self, list: String) -> Result<String, ClientError> {
        let url = self.url(&self.endpoints.save_path);
        debug!("saving {} bytes to {url}", list.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(list)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok(body)
    }

    /// Spawn a load request; the completion lands on `tx`
    pub fn spawn_load(&self, tx: UnboundedSender<NetMessage>) {
        let client = self.clone();
        tokio::spawn(async move {
            let message = match client.load().await {
                Ok(body) => NetMessage::Loaded(body),
                Err(e) => {
                    warn!("load failed: {e}");
                    NetMessage::LoadFailed(e.to_string())
                }
            };
            let _ = tx.send(message);
        });
    }

    /// Spawn a save request; the completion text lands on `tx` whether
    /// the device reported success or not
    pub fn spawn_save(&self, list: String, tx: UnboundedSender<NetMessage>) {
        let client = self.clone();
        tokio::spawn(async move {
            let message = match client.save(list).await {
                Ok(body) => NetMessage::Saved(body),
                Err(e) => {
                    warn!("save failed: {e}");
                    NetMessage::Saved(e.to_string())
                }
            };
            let _ = tx.send(message);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let endpoints = ListEndpoints {
            load_path: "/get_webradio.cgi".to_string(),
            save_path: "/post_webradio.cgi".to_string(),
        };
        let client = DeviceClient::new("http://192.168.4.1/", endpoints).unwrap();
        assert_eq!(
            client.url(&client.endpoints.load_path),
            "http://192.168.4.1/get_webradio.cgi"
        );
    }
}
