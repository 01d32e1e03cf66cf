// SPDX-License-Identifier: MPL-2.0
//! Selected video file and its declared MIME type.
//!
//! Files picked on the desktop carry no browser-declared content type, so the
//! declared type is derived from the extension. Only the `video/` prefix is
//! checked: no size limit, no content sniffing.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix a declared type must start with to be accepted.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// Type declared for extensions the table does not know.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extension to MIME table. Video entries also drive the file dialog filter.
const MIME_TABLE: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("ogv", "video/ogg"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
    ("3gp", "video/3gpp"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("txt", "text/plain"),
    ("srt", "text/plain"),
    ("pdf", "application/pdf"),
];

/// Returns the declared MIME type for a path, based on its extension.
#[must_use]
pub fn declared_mime(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_MIME;
    };
    MIME_TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(FALLBACK_MIME, |(_, mime)| mime)
}

/// Extensions whose declared type is a video type.
pub fn video_extensions() -> impl Iterator<Item = &'static str> {
    MIME_TABLE
        .iter()
        .filter(|(_, mime)| mime.starts_with(VIDEO_MIME_PREFIX))
        .map(|(ext, _)| *ext)
}

/// Why a candidate file was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The declared type does not start with `video/`.
    NotVideo { name: String, mime: &'static str },
    /// The path does not point at a readable file.
    NotFound { name: String },
}

impl Rejection {
    /// Returns the i18n message key for this rejection.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Rejection::NotVideo { .. } => "notification-upload-not-video",
            Rejection::NotFound { .. } => "notification-upload-not-found",
        }
    }

    /// Display name of the refused file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Rejection::NotVideo { name, .. } | Rejection::NotFound { name } => name,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotVideo { name, mime } => {
                write!(f, "{name} is not a video file (declared type {mime})")
            }
            Rejection::NotFound { name } => write!(f, "{name} is not a readable file"),
        }
    }
}

/// A file accepted for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    path: PathBuf,
    name: String,
    mime: &'static str,
}

impl VideoFile {
    /// Validates the declared type only. Does not touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::NotVideo`] when the declared type is not `video/*`.
    pub fn from_declared(path: impl Into<PathBuf>) -> Result<Self, Rejection> {
        let path = path.into();
        let name = file_name(&path);
        let mime = declared_mime(&path);
        if !mime.starts_with(VIDEO_MIME_PREFIX) {
            return Err(Rejection::NotVideo { name, mime });
        }
        Ok(Self { path, name, mime })
    }

    /// Validates the declared type and checks that the path is a file.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::NotVideo`] for non-video types and
    /// [`Rejection::NotFound`] when the path is not an existing file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Rejection> {
        let file = Self::from_declared(path)?;
        if !file.path.is_file() {
            return Err(Rejection::NotFound { name: file.name });
        }
        Ok(file)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared MIME type (always `video/*`).
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_mime_uses_extension_case_insensitively() {
        assert_eq!(declared_mime(Path::new("clip.MP4")), "video/mp4");
        assert_eq!(declared_mime(Path::new("talk.mov")), "video/quicktime");
        assert_eq!(declared_mime(Path::new("photo.png")), "image/png");
        assert_eq!(declared_mime(Path::new("README")), FALLBACK_MIME);
        assert_eq!(declared_mime(Path::new("data.xyz")), FALLBACK_MIME);
    }

    #[test]
    fn from_declared_accepts_video_and_keeps_name() {
        let file = VideoFile::from_declared("/tmp/videos/holiday.webm").expect("webm is video");
        assert_eq!(file.name(), "holiday.webm");
        assert_eq!(file.mime(), "video/webm");
    }

    #[test]
    fn from_declared_rejects_non_video() {
        let err = VideoFile::from_declared("notes.txt").unwrap_err();
        assert_eq!(
            err,
            Rejection::NotVideo {
                name: "notes.txt".into(),
                mime: "text/plain"
            }
        );
        assert_eq!(err.i18n_key(), "notification-upload-not-video");
    }

    #[test]
    fn open_rejects_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = VideoFile::open(dir.path().join("missing.mp4")).unwrap_err();
        assert!(matches!(err, Rejection::NotFound { ref name } if name == "missing.mp4"));
    }

    #[test]
    fn open_accepts_existing_video() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("clip.mkv");
        std::fs::write(&path, b"not really matroska").expect("write file");
        let file = VideoFile::open(&path).expect("existing mkv accepted");
        assert_eq!(file.path(), path.as_path());
    }

    #[test]
    fn video_extensions_only_lists_video_types() {
        let exts: Vec<_> = video_extensions().collect();
        assert!(exts.contains(&"mp4"));
        assert!(exts.contains(&"mpg"));
        assert!(!exts.contains(&"png"));
        assert!(!exts.contains(&"mp3"));
    }
}
