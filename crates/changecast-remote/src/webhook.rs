//! Webhook publishing of rendered changelogs

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{RemoteError, Result};

/// Uploads a changelog document as a file attachment to a chat webhook
#[derive(Debug, Clone)]
pub struct WebhookPublisher {
    client: Client,
    url: Url,
    timeout: Option<Duration>,
}

impl WebhookPublisher {
    /// Create a publisher for a webhook endpoint
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| RemoteError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(RemoteError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            client: Client::new(),
            url,
            timeout: None,
        })
    }

    /// Apply a per-request timeout; `None` keeps the client default
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Post `document` as `file_name` with `announcement` as the message text
    #[instrument(skip(self, document, announcement), fields(host = self.url.host_str().unwrap_or_default()))]
    pub async fn publish(&self, announcement: &str, file_name: &str, document: &str) -> Result<()> {
        let part = Part::text(document.to_string())
            .file_name(file_name.to_string())
            .mime_str("text/markdown")?;

        let form = Form::new()
            .text("content", announcement.to_string())
            .part("file", part);

        debug!(file_name, size = document.len(), "uploading changelog");

        let mut request = self.client.post(self.url.clone()).multipart(form);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::UploadFailed {
                status: status.as_u16(),
                body,
            });
        }

        info!(file_name, status = status.as_u16(), "changelog published");
        Ok(())
    }
}
