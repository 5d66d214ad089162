use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storeshot_utils::trimmed_or_none;
use tracing::debug;

use crate::catalog::{APPLE_DEVICE_KEYS, CUSTOM_DEVICE_KEY, device_preset, platform_resolutions};
use crate::error::ParseError;

/// Store the screenshots are produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    PlayStore,
    AppStore,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayStore => "play_store",
            Self::AppStore => "app_store",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform as requested by the caller: forced, or detected from the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformChoice {
    #[default]
    Auto,
    PlayStore,
    AppStore,
}

impl PlatformChoice {
    pub const fn explicit(self) -> Option<Platform> {
        match self {
            Self::Auto => None,
            Self::PlayStore => Some(Platform::PlayStore),
            Self::AppStore => Some(Platform::AppStore),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::PlayStore => "play_store",
            Self::AppStore => "app_store",
        }
    }
}

impl fmt::Display for PlatformChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformChoice {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "auto" => Ok(Self::Auto),
            "play_store" => Ok(Self::PlayStore),
            "app_store" => Ok(Self::AppStore),
            other => Err(ParseError::UnknownPlatform(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectRatio {
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Portrait => Orientation::Portrait,
            Self::Landscape => Orientation::Landscape,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "9:16",
            Self::Landscape => "16:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "9:16" => Ok(Self::Portrait),
            "16:9" => Ok(Self::Landscape),
            other => Err(ParseError::UnknownAspectRatio(other.to_string())),
        }
    }
}

/// Pixel dimensions, written as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidResolution(value.to_string());
        let (width, height) = value.trim().split_once('x').ok_or_else(invalid)?;
        let width: u32 = width.parse().map_err(|_| invalid())?;
        let height: u32 = height.parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self::new(width, height))
    }
}

impl TryFrom<String> for Resolution {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Resolution> for String {
    fn from(value: Resolution) -> Self {
        value.to_string()
    }
}

/// Decide the target store. A forced platform always wins; otherwise Apple
/// hardware maps to the App Store and everything else, unknown keys included,
/// to the Play Store.
pub fn detect_platform(device_key: &str, explicit_platform: PlatformChoice) -> Platform {
    if let Some(platform) = explicit_platform.explicit() {
        return platform;
    }

    if APPLE_DEVICE_KEYS.contains(&device_key) {
        Platform::AppStore
    } else {
        Platform::PlayStore
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDevice {
    pub display_name: String,
    pub platform: Platform,
    pub portrait: Resolution,
    pub landscape: Resolution,
}

impl ResolvedDevice {
    pub const fn resolution(&self, orientation: Orientation) -> Resolution {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }
}

/// Resolve the device label and the store resolutions for it.
///
/// Resolutions follow the resolved platform only: every App Store target
/// reports 1320x2868 and every Play Store target 1080x1920, so two devices on
/// the same store always agree.
pub fn resolve_device(
    device_key: &str,
    custom_device_name: Option<&str>,
    platform: PlatformChoice,
) -> ResolvedDevice {
    let resolved_platform = detect_platform(device_key, platform);

    let display_name = match trimmed_or_none(custom_device_name) {
        Some(name) if device_key == CUSTOM_DEVICE_KEY => name.to_string(),
        _ => device_preset(device_key).display_name.to_string(),
    };

    let (portrait, landscape) = platform_resolutions(resolved_platform);

    debug!(
        device = device_key,
        requested = %platform,
        display_name = %display_name,
        platform = %resolved_platform,
        "resolved device"
    );

    ResolvedDevice {
        display_name,
        platform: resolved_platform,
        portrait,
        landscape,
    }
}
