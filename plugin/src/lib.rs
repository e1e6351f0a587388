//! Tauri plugin to set the device wallpaper.
//!
//! Sets the home screen, lock screen, or both from an image URL or base64
//! data. On Android and iOS calls are forwarded to the native plugin. On
//! desktop the home screen is set through the `wallpaper` crate, and anywhere
//! else calls reject as unavailable.
//!
//! ```rust,ignore
//! tauri::Builder::default()
//!     .plugin(tauri_plugin_wallpaper::init())
//!     .run(tauri::generate_context!())
//!     .expect("error while running tauri application");
//! ```

use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod unavailable;

mod commands;
mod handle;

#[cfg(desktop)]
pub mod desktop;
#[cfg(mobile)]
mod mobile;

pub use backend::{BackendKind, WallpaperBackend};
pub use config::Config;
pub use error::{Error, Result};
pub use handle::Wallpaper;
pub use models::{
    CONTRACT_REVISION, WallpaperDisplay, WallpaperOptions, WallpaperResponse, WallpaperTarget,
};
pub use registry::{PLUGIN_NAME, Platform, Registration};

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to
/// access the wallpaper APIs.
pub trait WallpaperExt<R: Runtime> {
    fn wallpaper(&self) -> &Wallpaper;
}

impl<R: Runtime, T: Manager<R>> WallpaperExt<R> for T {
    fn wallpaper(&self) -> &Wallpaper { self.state::<Wallpaper>().inner() }
}

/// Initializes the plugin.
///
/// The backend is chosen once here and serves every later call.
#[must_use]
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::set_from_url,
            commands::set_from_base64,
            commands::request_permissions,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            let platform = Platform::current();
            let registration = match registry::select_kind(platform, &config) {
                #[cfg(mobile)]
                BackendKind::Native => {
                    Registration::new(std::sync::Arc::new(mobile::init(app, &api)?))
                }
                #[cfg(desktop)]
                BackendKind::Desktop => registry::desktop_registration(&config),
                _ => Registration::unavailable(),
            };

            tracing::debug!(
                backend = %registration.kind(),
                platform = ?platform,
                revision = CONTRACT_REVISION,
                "wallpaper: plugin registered"
            );

            app.manage(Wallpaper::new(registration, config.default_display));
            Ok(())
        })
        .build()
}
