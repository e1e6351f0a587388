//! Startup selection of the wallpaper backend.
//!
//! The plugin binds one backend to its name when the app starts. Calls never
//! look the implementation up again.

use std::sync::Arc;

use crate::backend::{BackendKind, WallpaperBackend};
use crate::config::Config;
use crate::unavailable::UnavailableBackend;

/// Name the plugin is registered under. IPC commands are addressed as
/// `plugin:wallpaper|<command>`.
pub const PLUGIN_NAME: &str = "wallpaper";

/// Platform family the app is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android or iOS.
    Mobile,
    /// Windows, macOS or Linux.
    Desktop,
}

impl Platform {
    /// Returns the platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) { Self::Mobile } else { Self::Desktop }
    }
}

/// Decides which backend serves calls.
///
/// Mobile always uses the native plugin. Desktop uses the `wallpaper` crate
/// unless disabled in the config.
#[must_use]
pub const fn select_kind(platform: Platform, config: &Config) -> BackendKind {
    match platform {
        Platform::Mobile => BackendKind::Native,
        Platform::Desktop if config.desktop_backend => BackendKind::Desktop,
        Platform::Desktop => BackendKind::Unavailable,
    }
}

/// A backend bound to the plugin name.
#[derive(Clone)]
pub struct Registration {
    name: &'static str,
    backend: Arc<dyn WallpaperBackend>,
}

impl Registration {
    /// Binds `backend` to the plugin name.
    #[must_use]
    pub fn new(backend: Arc<dyn WallpaperBackend>) -> Self { Self { name: PLUGIN_NAME, backend } }

    /// Registration whose every call rejects as unavailable.
    #[must_use]
    pub fn unavailable() -> Self { Self::new(Arc::new(UnavailableBackend::default())) }

    /// The registered plugin name.
    #[must_use]
    pub const fn name(&self) -> &'static str { self.name }

    /// Which implementation is bound.
    #[must_use]
    pub fn kind(&self) -> BackendKind { self.backend.kind() }

    /// The bound backend.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn WallpaperBackend> { &self.backend }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration").field("name", &self.name).field("kind", &self.kind()).finish()
    }
}

/// Registration serving calls through the `wallpaper` crate.
#[cfg(desktop)]
#[must_use]
pub fn desktop_registration(config: &Config) -> Registration {
    Registration::new(Arc::new(crate::desktop::DesktopBackend::new(config.resolved_cache_dir())))
}
