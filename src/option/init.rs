//! Instantiation-time settings, write-once for an instance's lifetime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::container::PixelSize;

/// Rendering backend requested at instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Pixel-buffer backend.
    #[default]
    Raster,
    /// Scalable-markup backend; required under server-render mode.
    Vector,
}

/// Engine bootstrap options.
///
/// These cannot be changed on a live instance. The adapter keys instance
/// identity on the `Rc` holding this value: a new `Rc` destroys and
/// recreates the chart, even when the value behind it is deep-equal.
///
/// When both `width` and `height` are set (useful for testing and for
/// server rendering), the chart keeps that fixed size instead of autosizing
/// to its container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InitOptions {
    pub renderer: RendererKind,
    /// Explicit chart width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit chart height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Server-render mode: the engine is detached from the container and the
    /// adapter sets the engine's markup output as the container's content.
    pub ssr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_pixel_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl InitOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: RendererKind) -> Self {
        self.renderer = renderer;
        self
    }

    /// Sets both explicit dimensions, pinning auto-sizing off.
    #[must_use]
    pub fn with_explicit_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_ssr(mut self, ssr: bool) -> Self {
        self.ssr = ssr;
        self
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// The pinned size, present only when both dimensions are explicit.
    #[must_use]
    pub fn explicit_size(&self) -> Option<PixelSize> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(PixelSize::new(width, height)),
            _ => None,
        }
    }

    /// Serializes to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes from JSON; absent fields take their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// Chart theme passed at instantiation: a registered theme name or an inline
/// style-definition object. Same write-once/identity rule as [`InitOptions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Theme {
    Named(String),
    Inline(Map<String, Value>),
}

impl Theme {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn inline(style: Map<String, Value>) -> Self {
        Self::Inline(style)
    }
}
