//! The interface every wallpaper backend implements.

use crate::error::Result;
use crate::models::{WallpaperOptions, WallpaperResponse};

/// Which implementation is serving wallpaper calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The Android or iOS native plugin.
    Native,
    /// The `wallpaper` crate on a desktop OS.
    Desktop,
    /// No wallpaper capability, every call rejects.
    Unavailable,
}

impl BackendKind {
    /// Returns a short name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Desktop => "desktop",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// A wallpaper-setting implementation.
///
/// Methods block until the platform settles the call. Options always carry a
/// concrete `display` by the time they reach a backend.
///
/// Each call either fully succeeds or fully fails, and is never retried.
pub trait WallpaperBackend: Send + Sync {
    /// Which implementation this is.
    fn kind(&self) -> BackendKind;

    /// Sets the wallpaper from an image at a URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecodeFailure` when the image cannot be fetched or
    /// decoded, and `Error::OsRejected` when the OS refuses the wallpaper.
    fn set_from_url(&self, options: &WallpaperOptions) -> Result<WallpaperResponse>;

    /// Sets the wallpaper from base64-encoded image data.
    ///
    /// # Errors
    ///
    /// Same as [`WallpaperBackend::set_from_url`].
    fn set_from_base64(&self, options: &WallpaperOptions) -> Result<WallpaperResponse>;

    /// Requests whatever authorization the OS needs to change the wallpaper.
    ///
    /// # Errors
    ///
    /// Returns `Error::PermissionDenied` when the user refuses.
    fn request_permissions(&self) -> Result<WallpaperResponse>;
}
