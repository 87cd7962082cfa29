//! HTTP client for a PrivateBin-compatible server.
//!
//! One POST per paste, no retries. Transport failures, non-2xx replies and
//! replies with a non-zero `status` are all reported as errors; the caller
//! never gets a link for a paste the server did not confirm.

use std::time::Duration;

use pbin_core::config::ServerConfig;
use pbin_core::{Expiration, PbinError, PbinResult};
use pbin_crypto::{delete_url, seal_paste, PasteContent, PasteRequest, SecretSource};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::types::{PasteLink, PasteResponse};

/// Marks the request as an API call; the server answers with JSON instead of HTML.
pub const JSON_API_HEADER: &str = "X-Requested-With";
pub const JSON_API_VALUE: &str = "JSONHttpRequest";

#[derive(Debug, Clone)]
pub struct PasteClient {
    client: Client,
    server: String,
}

impl PasteClient {
    /// Build a client for `server`, which must be an absolute URL.
    ///
    /// A zero `timeout` means no timeout.
    pub fn new(server: &str, timeout: Duration) -> PbinResult<Self> {
        url::Url::parse(server)
            .map_err(|e| PbinError::Config(format!("invalid server URL {server:?}: {e}")))?;

        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PbinError::Transport(format!("building HTTP client: {e}")))?;

        Ok(Self {
            client,
            server: server.to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> PbinResult<Self> {
        Self::new(
            &config.normalized_url(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// POST a fully built request body and return the parsed reply.
    pub async fn submit(&self, request: &PasteRequest) -> PbinResult<PasteResponse> {
        let body = request.to_json()?;
        debug!(server = %self.server, body_len = body.len(), "submitting paste");

        let resp = self
            .client
            .post(&self.server)
            .header(CONTENT_TYPE, "application/json")
            .header(JSON_API_HEADER, JSON_API_VALUE)
            .body(body)
            .send()
            .await
            .map_err(|e| PbinError::Transport(format!("sending paste: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(status = status.as_u16(), "reading rejection body: {e}");
                    String::new()
                }
            };
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                text.trim().to_string()
            };
            return Err(PbinError::ServerRejection {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PbinError::Transport(format!("reading reply: {e}")))?;
        let reply: PasteResponse = serde_json::from_slice(&bytes)
            .map_err(|e| PbinError::Transport(format!("malformed reply: {e}")))?;

        if reply.status != 0 {
            return Err(PbinError::ServerRejection {
                status: status.as_u16(),
                message: reply
                    .message
                    .unwrap_or_else(|| format!("status {}", reply.status)),
            });
        }
        if reply.url.is_empty() {
            return Err(PbinError::Transport("reply has no paste locator".into()));
        }

        Ok(reply)
    }

    /// Seal `content`, submit it, and build the share and delete links.
    ///
    /// Sealing finishes before anything is sent, so a local failure never
    /// reaches the network.
    pub async fn paste<S: SecretSource + ?Sized>(
        &self,
        source: &S,
        content: &PasteContent,
        expiration: &Expiration,
    ) -> PbinResult<PasteLink> {
        if !expiration.is_known() {
            warn!(expire = %expiration, "unrecognized expiration, forwarding as-is");
        }

        let sealed = seal_paste(source, content, expiration)?;
        let reply = self.submit(&sealed.request).await?;

        let link = PasteLink {
            url: sealed.access_url(&self.server, &reply.url),
            delete_url: delete_url(&self.server, &reply.id, &reply.deletetoken),
            id: reply.id,
        };
        info!(id = %link.id, expire = %expiration, "paste created");
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_server() {
        let err = PasteClient::new("vim.cx", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, PbinError::Config(_)));
    }

    #[test]
    fn test_accepts_absolute_server() {
        let client = PasteClient::new("https://vim.cx", Duration::from_secs(5)).unwrap();
        assert_eq!(client.server(), "https://vim.cx");
    }

    #[test]
    fn test_from_config_normalizes() {
        let config = ServerConfig {
            url: "paste.example.org/".into(),
            timeout_secs: 10,
        };
        let client = PasteClient::from_config(&config).unwrap();
        assert_eq!(client.server(), "https://paste.example.org");
    }

    #[test]
    fn test_zero_timeout_config_builds() {
        let config = ServerConfig {
            url: "https://paste.example.org".into(),
            timeout_secs: 0,
        };
        assert!(PasteClient::from_config(&config).is_ok());
    }
}
