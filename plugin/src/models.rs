//! Request and response types exchanged with wallpaper backends.
//!
//! These types are the plugin's contract. The webview sends them as JSON over
//! IPC, and the native mobile plugin receives them unchanged.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Revision of the call contract implemented by this crate.
///
/// Revision A: `set_from_url`, `set_from_base64` and `request_permissions`,
/// taking `{ input, target, display }` and returning `{ message }`.
pub const CONTRACT_REVISION: &str = "A";

/// Which screen(s) receive the new wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperTarget {
    /// Home screen.
    Home,
    /// Lock screen.
    Lock,
    /// Home and lock screen.
    Both,
}

impl WallpaperTarget {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Lock => "lock",
            Self::Both => "both",
        }
    }
}

impl FromStr for WallpaperTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "home" => Ok(Self::Home),
            "lock" => Ok(Self::Lock),
            "both" => Ok(Self::Both),
            _ => Err(Error::InvalidArguments(format!(
                "Invalid target '{s}'. Expected 'home', 'lock', or 'both'."
            ))),
        }
    }
}

impl std::fmt::Display for WallpaperTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// How the image is scaled into the target screen.
///
/// The same mode applies to every screen a call targets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperDisplay {
    /// Scale to fit inside the screen without distortion.
    Fit,
    /// Scale and crop to cover the screen.
    #[default]
    Fill,
    /// Stretch to the screen size, may distort.
    Stretch,
    /// Center without scaling.
    Center,
}

impl WallpaperDisplay {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Stretch => "stretch",
            Self::Center => "center",
        }
    }
}

impl FromStr for WallpaperDisplay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            "stretch" => Ok(Self::Stretch),
            "center" => Ok(Self::Center),
            _ => Err(Error::InvalidArguments(format!(
                "Invalid display '{s}'. Expected 'fit', 'fill', 'stretch', or 'center'."
            ))),
        }
    }
}

impl std::fmt::Display for WallpaperDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Options for a wallpaper-setting call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperOptions {
    /// The image: a URL for `set_from_url`, base64 data for `set_from_base64`.
    pub input: String,
    /// The screen(s) to update.
    pub target: WallpaperTarget,
    /// Scaling mode. Filled from the plugin config when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<WallpaperDisplay>,
}

impl WallpaperOptions {
    /// Creates options without an explicit display mode.
    #[must_use]
    pub fn new(input: impl Into<String>, target: WallpaperTarget) -> Self {
        Self { input: input.into(), target, display: None }
    }

    /// Sets the display mode.
    #[must_use]
    pub fn with_display(mut self, display: WallpaperDisplay) -> Self {
        self.display = Some(display);
        self
    }

    /// Returns the display mode, or `fallback` when none was given.
    #[must_use]
    pub fn display_or(&self, fallback: WallpaperDisplay) -> WallpaperDisplay {
        self.display.unwrap_or(fallback)
    }

    /// Checks that the input is present.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArguments` when `input` is empty or whitespace.
    pub fn validate(&self, what: &str) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(Error::InvalidArguments(format!("{what} is required!")));
        }
        Ok(())
    }
}

/// Result of a successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperResponse {
    /// Human-readable status.
    pub message: String,
}

impl WallpaperResponse {
    /// Creates a response with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }

    /// Confirmation for a wallpaper that was applied.
    #[must_use]
    pub fn updated(display: WallpaperDisplay, target: WallpaperTarget) -> Self {
        Self::new(format!("Wallpaper ({display}) updated successfully for {target} screen!"))
    }

    /// Confirmation for a permission request that needed no prompt.
    #[must_use]
    pub fn permissions_granted() -> Self { Self::new("Permissions already granted") }
}
