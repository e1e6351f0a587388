//! Plugin configuration.
//!
//! Read by Tauri from the `plugins.wallpaper` section of `tauri.conf.json`.
//! Every field is optional:
//!
//! ```json
//! {
//!   "plugins": {
//!     "wallpaper": {
//!       "desktopBackend": true,
//!       "defaultDisplay": "fill",
//!       "cacheDir": "~/.cache/my-app/wallpapers"
//!     }
//!   }
//! }
//! ```

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::WallpaperDisplay;

/// Name of the cache directory created under the user cache directory.
const CACHE_DIR_NAME: &str = "tauri-plugin-wallpaper";

/// Configuration for the wallpaper plugin.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Whether desktop targets use the `wallpaper` crate.
    /// When disabled, every call on desktop rejects as unavailable.
    pub desktop_backend: bool,

    /// Display mode used when a call does not specify one.
    pub default_display: WallpaperDisplay,

    /// Directory where decoded base64 images are written before being applied
    /// on desktop. Supports `~` expansion.
    pub cache_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            desktop_backend: true,
            default_display: WallpaperDisplay::default(),
            cache_dir: None,
        }
    }
}

impl Config {
    /// Generates the JSON Schema of the `plugins.wallpaper` config section.
    #[must_use]
    pub fn schema() -> schemars::Schema { schemars::schema_for!(Self) }

    /// Returns the directory for decoded images.
    ///
    /// Uses `cache_dir` when set, otherwise `{user cache dir}/tauri-plugin-wallpaper`,
    /// falling back to `/tmp/tauri-plugin-wallpaper` when no cache directory exists.
    #[must_use]
    pub fn resolved_cache_dir(&self) -> PathBuf {
        if let Some(dir) = self.cache_dir.as_deref().filter(|dir| !dir.trim().is_empty()) {
            return PathBuf::from(shellexpand::tilde(dir).as_ref());
        }

        dirs::cache_dir().map_or_else(
            || PathBuf::from(format!("/tmp/{CACHE_DIR_NAME}")),
            |cache| cache.join(CACHE_DIR_NAME),
        )
    }
}
