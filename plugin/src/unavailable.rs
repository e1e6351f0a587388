//! Backend for platforms without a wallpaper capability.
//!
//! Every operation rejects with `Error::PlatformUnavailable` and leaves the
//! wallpaper untouched.

use crate::backend::{BackendKind, WallpaperBackend};
use crate::error::{Error, Result};
use crate::models::{WallpaperOptions, WallpaperResponse};

/// Rejecting stand-in used when no native or desktop backend applies.
#[derive(Debug, Clone)]
pub struct UnavailableBackend {
    platform: String,
}

impl UnavailableBackend {
    /// Creates the backend. `platform` names where the plugin is running and
    /// ends up in every error message.
    #[must_use]
    pub fn new(platform: impl Into<String>) -> Self { Self { platform: platform.into() } }

    fn reject(&self, operation: &str) -> Result<WallpaperResponse> {
        tracing::warn!(
            operation,
            platform = %self.platform,
            "wallpaper: plugin is not available on this platform"
        );
        Err(Error::unavailable(&self.platform))
    }
}

impl Default for UnavailableBackend {
    fn default() -> Self { Self::new(std::env::consts::OS) }
}

impl WallpaperBackend for UnavailableBackend {
    fn kind(&self) -> BackendKind { BackendKind::Unavailable }

    fn set_from_url(&self, _options: &WallpaperOptions) -> Result<WallpaperResponse> {
        self.reject("set_from_url")
    }

    fn set_from_base64(&self, _options: &WallpaperOptions) -> Result<WallpaperResponse> {
        self.reject("set_from_base64")
    }

    fn request_permissions(&self) -> Result<WallpaperResponse> {
        self.reject("request_permissions")
    }
}
