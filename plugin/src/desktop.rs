//! Desktop wallpaper backend.
//!
//! Desktops have a single wallpaper surface, which this backend treats as the
//! home screen. Applying the image is delegated to the `wallpaper` crate.
//! Remote and base64 images are checked and written to the cache directory
//! before they are applied.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageReader;
use parking_lot::Mutex;
use tauri::Url;

use crate::backend::{BackendKind, WallpaperBackend};
use crate::error::{Error, Result};
use crate::models::{WallpaperDisplay, WallpaperOptions, WallpaperResponse, WallpaperTarget};

/// Prefix of every file this backend writes to its cache directory.
const FILE_PREFIX: &str = "wallpaper-";

/// OS and network access used by the desktop backend.
pub trait WallpaperSetter: Send + Sync {
    /// Sets the wallpaper from a local image file.
    ///
    /// # Errors
    ///
    /// Returns the OS error message on failure.
    fn set_from_path(&self, path: &Path) -> std::result::Result<(), String>;

    /// Downloads the body of `url`.
    ///
    /// # Errors
    ///
    /// Returns the error message when the request fails or the server answers
    /// with an error status.
    fn download(&self, url: &str) -> std::result::Result<Vec<u8>, String>;

    /// Sets how the wallpaper is scaled.
    ///
    /// # Errors
    ///
    /// Returns an error when the desktop does not support scaling modes.
    fn set_mode(&self, display: WallpaperDisplay) -> std::result::Result<(), String>;
}

/// [`WallpaperSetter`] backed by the `wallpaper` crate and `reqwest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSetter;

impl WallpaperSetter for SystemSetter {
    fn set_from_path(&self, path: &Path) -> std::result::Result<(), String> {
        let path = path.to_str().ok_or_else(|| format!("non UTF-8 path: {}", path.display()))?;
        wallpaper::set_from_path(path).map_err(|e| e.to_string())
    }

    fn download(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| e.to_string())?;
        response.bytes().map(|bytes| bytes.to_vec()).map_err(|e| e.to_string())
    }

    fn set_mode(&self, display: WallpaperDisplay) -> std::result::Result<(), String> {
        wallpaper::set_mode(to_mode(display)).map_err(|e| e.to_string())
    }
}

/// Maps a display mode to the `wallpaper` crate mode.
const fn to_mode(display: WallpaperDisplay) -> wallpaper::Mode {
    match display {
        WallpaperDisplay::Fit => wallpaper::Mode::Fit,
        WallpaperDisplay::Fill => wallpaper::Mode::Crop,
        WallpaperDisplay::Stretch => wallpaper::Mode::Stretch,
        WallpaperDisplay::Center => wallpaper::Mode::Center,
    }
}

/// Where a URL input points to.
#[derive(Debug, PartialEq, Eq)]
enum UrlSource {
    Remote(Url),
    Local(PathBuf),
}

fn parse_url(input: &str) -> Result<UrlSource> {
    let input = input.trim();
    let url = Url::parse(input)
        .map_err(|e| Error::InvalidArguments(format!("Invalid URL '{input}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(UrlSource::Remote(url)),
        "file" => url.to_file_path().map(UrlSource::Local).map_err(|()| {
            Error::InvalidArguments(format!("'{input}' does not point to a local file"))
        }),
        scheme => Err(Error::InvalidArguments(format!(
            "Unsupported URL scheme '{scheme}'. Expected http, https or file."
        ))),
    }
}

/// Decodes base64 image data, accepting an optional `data:` URI prefix and
/// embedded line breaks.
fn decode_base64(input: &str) -> Result<Vec<u8>> {
    let data = match input.trim().strip_prefix("data:") {
        Some(uri) => uri
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| Error::DecodeFailure("malformed data URI".to_string()))?,
        None => input,
    };

    let cleaned: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(cleaned).map_err(|e| Error::DecodeFailure(e.to_string()))
}

/// Returns the file extension matching the image format of `bytes`.
fn image_extension(bytes: &[u8]) -> Result<&'static str> {
    let format = image::guess_format(bytes)
        .map_err(|_| Error::DecodeFailure("data is not a recognized image".to_string()))?;
    format
        .extensions_str()
        .first()
        .copied()
        .ok_or_else(|| Error::DecodeFailure(format!("no file extension for {format:?}")))
}

fn is_cached_image(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(FILE_PREFIX))
}

fn remove_cached(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        tracing::debug!(path = %path.display(), error = %err, "wallpaper: failed to remove cached image");
    }
}

/// Desktop backend delegating to a [`WallpaperSetter`].
pub struct DesktopBackend<S = SystemSetter> {
    setter: S,
    cache_dir: PathBuf,
    /// Held while an image is written, applied and the cache pruned.
    apply_lock: Mutex<()>,
}

impl DesktopBackend<SystemSetter> {
    /// Creates a backend that applies wallpapers through the OS.
    ///
    /// `cache_dir` is only created when an image is first written.
    #[must_use]
    pub fn new(cache_dir: PathBuf) -> Self { Self::with_setter(SystemSetter, cache_dir) }
}

impl<S: WallpaperSetter> DesktopBackend<S> {
    /// Creates a backend with a custom setter.
    #[must_use]
    pub fn with_setter(setter: S, cache_dir: PathBuf) -> Self {
        Self { setter, cache_dir, apply_lock: Mutex::new(()) }
    }

    /// Returns the directory downloaded and decoded images are written to.
    #[must_use]
    pub fn cache_dir(&self) -> &Path { &self.cache_dir }

    fn ensure_home_target(target: WallpaperTarget) -> Result<()> {
        if target == WallpaperTarget::Home {
            return Ok(());
        }
        Err(Error::unavailable(format!("{} for the {target} target", std::env::consts::OS)))
    }

    /// Applies the display mode after the image is set. Many desktops have no
    /// notion of scaling modes, so failures are only logged.
    fn apply_mode(&self, mode: WallpaperDisplay) {
        if let Err(err) = self.setter.set_mode(mode) {
            tracing::debug!(display = %mode, error = %err, "wallpaper: display mode not applied");
        }
    }

    fn finish(&self, path: &Path, options: &WallpaperOptions) -> WallpaperResponse {
        let mode = options.display_or(WallpaperDisplay::default());
        self.apply_mode(mode);
        tracing::info!(path = %path.display(), display = %mode, "wallpaper: desktop wallpaper updated");
        WallpaperResponse::updated(mode, options.target)
    }

    /// Sets an existing image file.
    fn apply_file(&self, path: &Path, options: &WallpaperOptions) -> Result<WallpaperResponse> {
        let _guard = self.apply_lock.lock();
        self.setter.set_from_path(path).map_err(Error::OsRejected)?;
        Ok(self.finish(path, options))
    }

    /// Writes image bytes to the cache directory and sets them.
    ///
    /// Older cached images are removed only once the new one is applied. A
    /// failed set removes the new file and leaves the current wallpaper's file
    /// in place.
    fn apply_bytes(&self, bytes: &[u8], options: &WallpaperOptions) -> Result<WallpaperResponse> {
        let extension = image_extension(bytes)?;

        let _guard = self.apply_lock.lock();
        let path = self.write_image(bytes, extension)?;
        if let Err(err) = self.setter.set_from_path(&path) {
            remove_cached(&path);
            return Err(Error::OsRejected(err));
        }
        self.prune_cache(&path);
        Ok(self.finish(&path, options))
    }

    fn write_image(&self, bytes: &[u8], extension: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.cache_dir)?;
        let path = self.cache_dir.join(format!("{FILE_PREFIX}{}.{extension}", uuid::Uuid::now_v7()));
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Removes every cached image except `keep`.
    fn prune_cache(&self, keep: &Path) {
        let entries = match fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(error = %err, "wallpaper: failed to read cache directory");
                return;
            }
        };

        for path in entries.filter_map(std::result::Result::ok).map(|entry| entry.path()) {
            if path != keep && is_cached_image(&path) {
                remove_cached(&path);
            }
        }
    }
}

impl<S: WallpaperSetter> WallpaperBackend for DesktopBackend<S> {
    fn kind(&self) -> BackendKind { BackendKind::Desktop }

    fn set_from_url(&self, options: &WallpaperOptions) -> Result<WallpaperResponse> {
        Self::ensure_home_target(options.target)?;

        match parse_url(&options.input)? {
            UrlSource::Local(path) => {
                let format = ImageReader::open(&path)
                    .map_err(|e| Error::DecodeFailure(format!("{}: {e}", path.display())))?
                    .with_guessed_format()?
                    .format();
                if format.is_none() {
                    return Err(Error::DecodeFailure(format!(
                        "{} is not a recognized image",
                        path.display()
                    )));
                }
                self.apply_file(&path, options)
            }
            UrlSource::Remote(url) => {
                tracing::debug!(%url, "wallpaper: downloading image");
                let bytes = self
                    .setter
                    .download(url.as_str())
                    .map_err(|e| Error::DecodeFailure(format!("{url}: {e}")))?;
                self.apply_bytes(&bytes, options)
            }
        }
    }

    fn set_from_base64(&self, options: &WallpaperOptions) -> Result<WallpaperResponse> {
        Self::ensure_home_target(options.target)?;

        let bytes = decode_base64(&options.input)?;
        self.apply_bytes(&bytes, options)
    }

    fn request_permissions(&self) -> Result<WallpaperResponse> {
        Ok(WallpaperResponse::permissions_granted())
    }
}
