//! Error types for the wallpaper plugin.
//!
//! Every failure a caller can observe is one of these kinds. They serialize as
//! `{ "kind": ..., "message": ... }` so the webview receives structured errors
//! from rejected commands.

use serde::Serialize;
use thiserror::Error;

/// Native error code for a refused permission prompt.
pub const CODE_PERMISSION_DENIED: &str = "PERMISSION_DENIED";
/// Native error code for an image that could not be fetched or decoded.
pub const CODE_DECODE_FAILURE: &str = "DECODE_FAILURE";
/// Native error code for a failed OS wallpaper assignment.
pub const CODE_OS_REJECTED: &str = "OS_REJECTED";

/// Errors that can occur while setting a wallpaper.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum Error {
    /// No wallpaper capability exists on this platform.
    #[error("{0}")]
    PlatformUnavailable(String),
    /// The user refused the wallpaper permission.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    /// The image could not be fetched or interpreted.
    #[error("Failed to decode image: {0}")]
    DecodeFailure(String),
    /// The operating system refused to set the wallpaper.
    #[error("Failed to set wallpaper: {0}")]
    OsRejected(String),
    /// Invalid call arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),
    /// The host runtime failed to run the call.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result alias used across the plugin.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Rejection for a platform that cannot set the wallpaper.
    #[must_use]
    pub fn unavailable(platform: impl std::fmt::Display) -> Self {
        Self::PlatformUnavailable(format!("Wallpaper plugin is not available on {platform}"))
    }

    /// Maps a rejection reported by the native plugin to an error kind.
    ///
    /// The message is passed through unmodified. Unknown or missing codes are
    /// treated as an OS rejection.
    #[must_use]
    pub fn from_native(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some(CODE_PERMISSION_DENIED) => Self::PermissionDenied(message),
            Some(CODE_DECODE_FAILURE) => Self::DecodeFailure(message),
            _ => Self::OsRejected(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self { Self::Io(err.to_string()) }
}

impl From<tauri::Error> for Error {
    fn from(err: tauri::Error) -> Self { Self::Runtime(err.to_string()) }
}

#[cfg(mobile)]
impl From<tauri::plugin::mobile::PluginInvokeError> for Error {
    fn from(err: tauri::plugin::mobile::PluginInvokeError) -> Self {
        use tauri::plugin::mobile::PluginInvokeError;

        match err {
            PluginInvokeError::InvokeRejected(response) => Self::from_native(
                response.code.as_deref(),
                response.message.unwrap_or_else(|| "native call rejected".to_string()),
            ),
            other => Self::Runtime(other.to_string()),
        }
    }
}
