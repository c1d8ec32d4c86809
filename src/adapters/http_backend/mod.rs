// HTTP backend adapter - Client for the external clipping service

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{ClipMarkError, ClipMarkResult};
use crate::media;
use crate::ports::{ClipServicePort, ClipSubmission};

/// HTTP implementation of the clipping service port
pub struct HttpClipService {
    client: Client,
    base_url: String,
}

impl HttpClipService {
    /// Create a client against the configured backend
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/clip-video/", self.base_url)
    }

    /// Build a multipart file part from a local path
    async fn file_part(path: &Path) -> ClipMarkResult<Part> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(media::content_type_for(path))?;
        Ok(part)
    }
}

#[async_trait]
impl ClipServicePort for HttpClipService {
    async fn submit(&self, submission: &ClipSubmission) -> ClipMarkResult<Vec<u8>> {
        let mut form = Form::new()
            .part("video", Self::file_part(&submission.video).await?)
            .text("intervals", submission.intervals.clone());
        if let Some(audio) = &submission.audio {
            form = form.part("audio", Self::file_part(audio).await?);
        }

        let endpoint = self.endpoint();
        info!(%endpoint, intervals = %submission.intervals, "Submitting clip request");

        let response = self.client.post(&endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClipMarkError::BackendRejected {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        debug!(len = bytes.len(), "Received rendered clip");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> AppConfig {
        AppConfig {
            backend_url: url.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let service = HttpClipService::new(&config_with_url("http://localhost:8000/"));
        assert_eq!(service.endpoint(), "http://localhost:8000/clip-video/");

        let service = HttpClipService::new(&config_with_url("http://localhost:8000"));
        assert_eq!(service.endpoint(), "http://localhost:8000/clip-video/");
    }
}
