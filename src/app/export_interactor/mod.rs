// Export interactor - Orchestrates the clip export use case

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::domain::model::IntervalSet;
use crate::error::{ClipMarkError, ClipMarkResult};
use crate::media;
use crate::ports::{ClipServicePort, ClipSubmission};

/// Download name for a clip without an audio overlay
pub const CLIP_FILE_NAME: &str = "clipped_video.mp4";

/// Download name for a clip with an audio overlay
pub const CLIP_WITH_AUDIO_FILE_NAME: &str = "clipped_video_with_audio.mp4";

/// Interactor for the clip export use case
pub struct ExportInteractor {
    clip_service: Arc<dyn ClipServicePort>,
    output_dir: PathBuf,
}

impl ExportInteractor {
    /// Create a new export interactor with an injected backend port
    pub fn new(clip_service: Arc<dyn ClipServicePort>, output_dir: PathBuf) -> Self {
        Self {
            clip_service,
            output_dir,
        }
    }

    /// Export the committed intervals as a rendered clip.
    ///
    /// Preconditions are checked before any network activity: a media file
    /// must be loaded and at least one interval committed. A single attempt
    /// is made; failures surface as errors and no download is produced.
    pub async fn export(
        &self,
        media_file: Option<&Path>,
        audio_file: Option<&Path>,
        intervals: &IntervalSet,
    ) -> ClipMarkResult<PathBuf> {
        let video = media_file.ok_or(ClipMarkError::NoMediaLoaded)?;
        if intervals.is_empty() {
            return Err(ClipMarkError::EmptyIntervalSet);
        }
        media::require_file(video)?;
        if let Some(audio) = audio_file {
            media::require_file(audio)?;
        }

        let submission = ClipSubmission {
            video: video.to_path_buf(),
            audio: audio_file.map(Path::to_path_buf),
            intervals: intervals.to_tokens(),
        };

        info!(
            video = %video.display(),
            intervals = intervals.len(),
            with_audio = submission.audio.is_some(),
            "Starting clip export"
        );
        let bytes = self.clip_service.submit(&submission).await?;

        let file_name = if submission.audio.is_some() {
            CLIP_WITH_AUDIO_FILE_NAME
        } else {
            CLIP_FILE_NAME
        };
        let output_path = self.output_dir.join(file_name);
        self.write_download(&output_path, &bytes)?;

        info!(output = %output_path.display(), bytes = bytes.len(), "Export complete");
        Ok(output_path)
    }

    /// Write the rendered clip into the output directory via a temp file
    /// renamed into place.
    fn write_download(&self, output_path: &Path, bytes: &[u8]) -> ClipMarkResult<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.output_dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(output_path)
            .map_err(|e| ClipMarkError::IoError(e.error))?;
        Ok(())
    }
}
