//! Media file discovery and validation

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ClipMarkError, ClipMarkResult};

/// File extensions treated as video sources
pub const VIDEO_EXTENSIONS: &[&str] = &["avi", "m4v", "mkv", "mov", "mp4", "webm"];

/// File extensions treated as audio overlays
pub const AUDIO_EXTENSIONS: &[&str] = &["aac", "flac", "m4a", "mp3", "ogg", "opus", "wav"];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Whether the path carries a recognized video extension
pub fn is_video_file(path: &Path) -> bool {
    extension_of(path).map_or(false, |ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Whether the path carries a recognized audio extension
pub fn is_audio_file(path: &Path) -> bool {
    extension_of(path).map_or(false, |ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}

/// Recursively collect video files under `dir`, sorted by path.
pub fn find_media_files(dir: &Path) -> ClipMarkResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ClipMarkError::InputFileNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_video_file(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Ensure `path` names an existing regular file.
pub fn require_file(path: &Path) -> ClipMarkResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ClipMarkError::InputFileNotFound {
            path: path.display().to_string(),
        })
    }
}

/// Content type reported to the backend for an upload
pub fn content_type_for(path: &Path) -> &'static str {
    match extension_of(path).as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("aac") => "audio/aac",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",
        Some("ogg") | Some("opus") => "audio/ogg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_classification() {
        assert!(is_video_file(Path::new("movie.MP4")));
        assert!(is_video_file(Path::new("dir/movie.mkv")));
        assert!(!is_video_file(Path::new("track.mp3")));
        assert!(!is_video_file(Path::new("noext")));

        assert!(is_audio_file(Path::new("track.mp3")));
        assert!(!is_audio_file(Path::new("movie.mp4")));
    }

    #[test]
    fn test_content_type_fallback() {
        assert_eq!(content_type_for(Path::new("a.mp4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("a.wav")), "audio/wav");
        assert_eq!(
            content_type_for(Path::new("a.unknown")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_find_media_files_missing_dir() {
        assert!(find_media_files(Path::new("no_such_directory_here")).is_err());
    }
}
