//! IPC commands exposed to the webview.
//!
//! Invoked as `plugin:wallpaper|set_from_url`, `plugin:wallpaper|set_from_base64`
//! and `plugin:wallpaper|request_permissions`.

use tauri::{AppHandle, Runtime, command};

use crate::WallpaperExt;
use crate::error::Result;
use crate::models::{WallpaperOptions, WallpaperResponse};

/// Sets the wallpaper from an image URL.
#[command]
pub async fn set_from_url<R: Runtime>(
    app: AppHandle<R>,
    options: WallpaperOptions,
) -> Result<WallpaperResponse> {
    app.wallpaper().set_from_url(options).await
}

/// Sets the wallpaper from base64-encoded image data.
#[command]
pub async fn set_from_base64<R: Runtime>(
    app: AppHandle<R>,
    options: WallpaperOptions,
) -> Result<WallpaperResponse> {
    app.wallpaper().set_from_base64(options).await
}

/// Requests the permissions needed to change the wallpaper.
#[command]
pub async fn request_permissions<R: Runtime>(app: AppHandle<R>) -> Result<WallpaperResponse> {
    app.wallpaper().request_permissions().await
}
