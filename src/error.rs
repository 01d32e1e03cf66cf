// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Upload(UploadError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(detail) => write!(f, "i/o failure: {detail}"),
            Self::Config(detail) => write!(f, "bad settings file: {detail}"),
            Self::Upload(inner) => write!(f, "upload failed: {inner}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upload(inner) => Some(inner),
            Self::Io(_) | Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Self::Upload(err)
    }
}

/// Why sending the video to the translation backend failed. Each variant
/// maps to its own toast text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Reading the local file failed.
    Io(String),
    /// The request could not be assembled locally, e.g. a malformed MIME type.
    InvalidRequest(String),
    /// No HTTP response at all: refused connection, timeout, TLS.
    Network(String),
    /// Non-2xx status, with the backend's `error` field when it sent one.
    Status { code: u16, message: Option<String> },
    /// A 2xx body that is not the expected JSON.
    InvalidResponse(String),
}

impl UploadError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Io(_) => "notification-upload-error-io",
            Self::InvalidRequest(_) => "notification-upload-error-request",
            Self::Network(_) => "notification-upload-error-network",
            Self::Status { .. } => "notification-upload-error-status",
            Self::InvalidResponse(_) => "notification-upload-error-response",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(detail) => write!(f, "cannot read video: {detail}"),
            Self::InvalidRequest(detail) => write!(f, "cannot build request: {detail}"),
            Self::Network(detail) => write!(f, "backend unreachable: {detail}"),
            Self::Status { code, message } => {
                write!(f, "HTTP {code}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            Self::InvalidResponse(detail) => write!(f, "unexpected response: {detail}"),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            _ if err.is_decode() => Self::InvalidResponse(err.to_string()),
            Some(status) => Self::Status {
                code: status.as_u16(),
                message: None,
            },
            None => Self::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_errors_convert_and_keep_their_text() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(&err, Error::Io(detail) if detail.contains("disk full")));
        assert_eq!(err.to_string(), "i/o failure: disk full");
    }

    #[test]
    fn config_error_display() {
        let err = Error::Config("expected a table".into());
        assert_eq!(err.to_string(), "bad settings file: expected a table");
    }

    #[test]
    fn upload_error_is_exposed_as_source() {
        let err: Error = UploadError::Network("refused".into()).into();
        assert_eq!(err.to_string(), "upload failed: backend unreachable: refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn status_display_appends_backend_message_when_present() {
        let with_message = UploadError::Status {
            code: 400,
            message: Some("No file uploaded".into()),
        };
        let bare = UploadError::Status {
            code: 502,
            message: None,
        };
        assert_eq!(with_message.to_string(), "HTTP 400: No file uploaded");
        assert_eq!(bare.to_string(), "HTTP 502");
    }

    #[test]
    fn every_upload_error_has_a_distinct_toast_key() {
        let keys = [
            UploadError::Io(String::new()).i18n_key(),
            UploadError::InvalidRequest(String::new()).i18n_key(),
            UploadError::Network(String::new()).i18n_key(),
            UploadError::Status {
                code: 500,
                message: None,
            }
            .i18n_key(),
            UploadError::InvalidResponse(String::new()).i18n_key(),
        ];
        for (i, key) in keys.iter().enumerate() {
            assert!(key.starts_with("notification-upload-error-"));
            assert!(!keys[i + 1..].contains(key));
        }
    }
}
