// Ports - Interface definitions (contracts)

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::ClipMarkResult;

/// Everything the clipping backend needs to render a clip
#[derive(Debug, Clone)]
pub struct ClipSubmission {
    /// Source media file
    pub video: PathBuf,
    /// Optional audio overlay file
    pub audio: Option<PathBuf>,
    /// Comma-separated `start-end` tokens in decimal seconds
    pub intervals: String,
}

/// Port for the external clipping service
#[async_trait]
pub trait ClipServicePort: Send + Sync {
    /// Submit media and interval list, returning the rendered clip bytes.
    ///
    /// A single attempt per call; retries are the caller's decision.
    async fn submit(&self, submission: &ClipSubmission) -> ClipMarkResult<Vec<u8>>;
}
