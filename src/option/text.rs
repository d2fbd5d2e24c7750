//! Text styling passed through to the engine, including named rich spans.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Background fill of a rich span: a flat color or an image reference
/// (typically a data URI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundFill {
    Color(String),
    Image { image: String },
}

/// Font weight, numeric or named (`"bold"`, `"lighter"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u32),
    Named(String),
}

/// Style block for one named rich span, referenced from `{name|...}` text
/// markup. All attributes are engine-interpreted; the adapter passes them
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RichSpanStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Top/right/bottom/left padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<BackgroundFill>,
}

impl RichSpanStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_box_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: [f64; 4]) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_background(mut self, fill: BackgroundFill) -> Self {
        self.background_color = Some(fill);
        self
    }
}

/// Text style with optional named rich spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Named span styles, keyed by the span name used in text markup.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rich: IndexMap<String, RichSpanStyle>,
}

impl TextStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_rich_span(mut self, name: impl Into<String>, style: RichSpanStyle) -> Self {
        self.rich.insert(name.into(), style);
        self
    }
}
