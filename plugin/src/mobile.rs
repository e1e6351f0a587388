//! Native mobile backend.
//!
//! Forwards every call to the Android or iOS wallpaper plugin over Tauri's
//! mobile bridge. Decoding the image and talking to the OS wallpaper store
//! happens entirely on the native side.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tauri::plugin::{PluginApi, PluginHandle};
use tauri::{AppHandle, Runtime};

use crate::backend::{BackendKind, WallpaperBackend};
use crate::error::Result;
use crate::models::{CONTRACT_REVISION, WallpaperOptions, WallpaperResponse};

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "dev.kevinillanas.plugin.wallpaper";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_wallpaper);

/// Registers the native plugin and returns a backend bound to it.
///
/// # Errors
///
/// Returns an error if the host fails to load the native plugin.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: &PluginApi<R, C>,
) -> Result<NativeBackend<R>> {
    #[cfg(target_os = "android")]
    let handle = api
        .register_android_plugin(PLUGIN_IDENTIFIER, "WallpaperPlugin")
        .map_err(|e| crate::Error::Runtime(e.to_string()))?;
    #[cfg(target_os = "ios")]
    let handle = api
        .register_ios_plugin(init_plugin_wallpaper)
        .map_err(|e| crate::Error::Runtime(e.to_string()))?;
    Ok(NativeBackend(handle))
}

/// Payload sent with every wallpaper-setting call.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NativeRequest<'a> {
    #[serde(flatten)]
    options: &'a WallpaperOptions,
    contract_revision: &'static str,
}

/// Payload for calls without options.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NativeEmptyRequest {
    contract_revision: &'static str,
}

/// Backend that forwards to the native plugin.
pub struct NativeBackend<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> NativeBackend<R> {
    fn forward(&self, method: &str, options: &WallpaperOptions) -> Result<WallpaperResponse> {
        tracing::debug!(method, target = %options.target, "wallpaper: forwarding to native plugin");
        let request = NativeRequest { options, contract_revision: CONTRACT_REVISION };
        self.0.run_mobile_plugin(method, request).map_err(Into::into)
    }
}

impl<R: Runtime> WallpaperBackend for NativeBackend<R> {
    fn kind(&self) -> BackendKind { BackendKind::Native }

    fn set_from_url(&self, options: &WallpaperOptions) -> Result<WallpaperResponse> {
        self.forward("setFromURL", options)
    }

    fn set_from_base64(&self, options: &WallpaperOptions) -> Result<WallpaperResponse> {
        self.forward("setFromBase64", options)
    }

    fn request_permissions(&self) -> Result<WallpaperResponse> {
        self.0
            .run_mobile_plugin(
                "requestPermissions",
                NativeEmptyRequest { contract_revision: CONTRACT_REVISION },
            )
            .map_err(Into::into)
    }
}
