//! Declarative chart configuration applied to a live engine instance.
//!
//! These types mirror the engine's own option schema (serialized in the
//! engine's camelCase convention) and are passed through without semantic
//! interpretation. Anything not modeled explicitly travels in the flattened
//! `extra` maps.

mod init;
mod text;
mod update;

pub use init::{InitOptions, RendererKind, Theme};
pub use text::{BackgroundFill, FontWeight, RichSpanStyle, TextStyle};
pub use update::{ComponentKind, UpdateInstruction, UpdateOpts, UpdatePlan, plan_update};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chart title component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    #[must_use]
    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }
}

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
    Time,
    Log,
}

/// One axis component.
///
/// An axis carrying a stable `id` is merged in place on updates; one without
/// is replaced (see [`plan_update`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,
    /// Category labels; empty for non-category axes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Axis {
    #[must_use]
    pub fn category() -> Self {
        Self {
            kind: Some(AxisKind::Category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value() -> Self {
        Self {
            kind: Some(AxisKind::Value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One series component. Same stable-id update rule as [`Axis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Engine series kind (`"line"`, `"bar"`, ...); an open set the adapter
    /// does not interpret.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Line series with a stable id.
    #[must_use]
    pub fn line(id: impl Into<String>) -> Self {
        Self::new("line").with_id(id)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Full declarative configuration of one chart.
///
/// Applied via the engine update call on every synchronization pass; never a
/// recreation trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x_axis: Vec<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Unmodeled engine options, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOption {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis.push(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis.push(axis);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Serializes to pretty JSON in the engine's schema.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes from JSON; absent fields take their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}
