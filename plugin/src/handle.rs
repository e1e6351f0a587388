//! The managed wallpaper handle.
//!
//! Exposes the backend's blocking operations as async calls that run on
//! Tauri's blocking thread pool.

use std::sync::Arc;

use crate::backend::{BackendKind, WallpaperBackend};
use crate::error::Result;
use crate::models::{WallpaperDisplay, WallpaperOptions, WallpaperResponse};
use crate::registry::Registration;

/// Access to the wallpaper APIs.
///
/// Stored in Tauri's managed state by the plugin and reachable through
/// [`crate::WallpaperExt`].
#[derive(Debug, Clone)]
pub struct Wallpaper {
    registration: Registration,
    default_display: WallpaperDisplay,
}

impl Wallpaper {
    /// Creates a handle over a registered backend.
    #[must_use]
    pub const fn new(registration: Registration, default_display: WallpaperDisplay) -> Self {
        Self { registration, default_display }
    }

    /// Which backend serves calls.
    #[must_use]
    pub fn backend_kind(&self) -> BackendKind { self.registration.kind() }

    /// The backend registration.
    #[must_use]
    pub const fn registration(&self) -> &Registration { &self.registration }

    /// Sets the wallpaper from an image URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArguments` for an empty URL, otherwise whatever
    /// the backend reports.
    pub async fn set_from_url(&self, options: WallpaperOptions) -> Result<WallpaperResponse> {
        options.validate("URL")?;
        let options = self.complete(options);
        let backend = self.backend();
        run_blocking(move || backend.set_from_url(&options)).await
    }

    /// Sets the wallpaper from base64-encoded image data.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArguments` for empty data, otherwise whatever
    /// the backend reports.
    pub async fn set_from_base64(&self, options: WallpaperOptions) -> Result<WallpaperResponse> {
        options.validate("Base64 string")?;
        let options = self.complete(options);
        let backend = self.backend();
        run_blocking(move || backend.set_from_base64(&options)).await
    }

    /// Requests the permissions needed to change the wallpaper.
    ///
    /// # Errors
    ///
    /// Returns `Error::PermissionDenied` when refused, or
    /// `Error::PlatformUnavailable` where wallpapers cannot be set.
    pub async fn request_permissions(&self) -> Result<WallpaperResponse> {
        let backend = self.backend();
        run_blocking(move || backend.request_permissions()).await
    }

    fn backend(&self) -> Arc<dyn WallpaperBackend> { Arc::clone(self.registration.backend()) }

    /// Fills in the default display mode.
    fn complete(&self, mut options: WallpaperOptions) -> WallpaperOptions {
        options.display = Some(options.display_or(self.default_display));
        options
    }
}

async fn run_blocking<F>(call: F) -> Result<WallpaperResponse>
where
    F: FnOnce() -> Result<WallpaperResponse> + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(call).await?
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::Error;
    use crate::models::WallpaperTarget;

    /// Backend that records the options it receives.
    #[derive(Default)]
    struct CapturingBackend {
        seen: Mutex<Vec<WallpaperOptions>>,
    }

    impl WallpaperBackend for CapturingBackend {
        fn kind(&self) -> BackendKind { BackendKind::Native }

        fn set_from_url(&self, options: &WallpaperOptions) -> Result<WallpaperResponse> {
            self.seen.lock().unwrap().push(options.clone());
            Ok(WallpaperResponse::updated(options.display_or(WallpaperDisplay::Fit), options.target))
        }

        fn set_from_base64(&self, options: &WallpaperOptions) -> Result<WallpaperResponse> {
            self.seen.lock().unwrap().push(options.clone());
            Err(Error::DecodeFailure("bad bitmap".to_string()))
        }

        fn request_permissions(&self) -> Result<WallpaperResponse> {
            Err(Error::PermissionDenied("user refused".to_string()))
        }
    }

    fn handle(backend: &Arc<CapturingBackend>, display: WallpaperDisplay) -> Wallpaper {
        let backend: Arc<dyn WallpaperBackend> = backend.clone();
        Wallpaper::new(Registration::new(backend), display)
    }

    #[tokio::test]
    async fn test_missing_display_uses_default() {
        let backend = Arc::new(CapturingBackend::default());
        let wallpaper = handle(&backend, WallpaperDisplay::Center);

        let response = wallpaper
            .set_from_url(WallpaperOptions::new("https://example.com/a.png", WallpaperTarget::Both))
            .await
            .unwrap();

        assert_eq!(response.message, "Wallpaper (center) updated successfully for both screen!");
        assert_eq!(backend.seen.lock().unwrap()[0].display, Some(WallpaperDisplay::Center));
    }

    #[tokio::test]
    async fn test_explicit_display_is_kept() {
        let backend = Arc::new(CapturingBackend::default());
        let wallpaper = handle(&backend, WallpaperDisplay::Center);

        let options = WallpaperOptions::new("https://example.com/a.png", WallpaperTarget::Home)
            .with_display(WallpaperDisplay::Stretch);
        wallpaper.set_from_url(options).await.unwrap();

        assert_eq!(backend.seen.lock().unwrap()[0].display, Some(WallpaperDisplay::Stretch));
    }

    #[tokio::test]
    async fn test_empty_input_never_reaches_backend() {
        let backend = Arc::new(CapturingBackend::default());
        let wallpaper = handle(&backend, WallpaperDisplay::Fill);

        let err = wallpaper
            .set_from_url(WallpaperOptions::new("", WallpaperTarget::Home))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "URL is required!");

        let err = wallpaper
            .set_from_base64(WallpaperOptions::new(" ", WallpaperTarget::Home))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Base64 string is required!");

        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_errors_pass_through() {
        let backend = Arc::new(CapturingBackend::default());
        let wallpaper = handle(&backend, WallpaperDisplay::Fill);

        let err = wallpaper
            .set_from_base64(WallpaperOptions::new("aGVsbG8=", WallpaperTarget::Lock))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DecodeFailure(ref msg) if msg == "bad bitmap"));

        let err = wallpaper.request_permissions().await.unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_unavailable_registration_rejects() {
        let wallpaper = Wallpaper::new(Registration::unavailable(), WallpaperDisplay::Fill);
        assert_eq!(wallpaper.backend_kind(), BackendKind::Unavailable);

        let options = WallpaperOptions::new("https://example.com/a.png", WallpaperTarget::Home)
            .with_display(WallpaperDisplay::Fill);
        let err = wallpaper.set_from_url(options).await.unwrap_err();
        assert!(matches!(err, Error::PlatformUnavailable(_)));
    }
}
