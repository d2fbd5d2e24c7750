//! chart-embed: thin GTK4 embedding adapter for declarative charting engines.
//!
//! The crate owns the lifecycle of one engine instance per mounted
//! container, translates declarative option updates into engine update
//! calls, and keeps the chart's pixel size synchronized with its container's
//! content box. Chart math and painting stay inside the external engine
//! behind the [`ChartEngine`] contract.

pub mod container;
pub mod engine;
pub mod error;
pub mod option;
pub mod telemetry;
pub mod view;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use container::{ChartContainer, PixelSize};
pub use engine::{ChartApi, ChartApiRef, ChartEngine, chart_api_ref};
pub use error::{EmbedError, EmbedResult};
pub use option::{ChartOption, InitOptions, Theme, UpdateOpts};
pub use view::{ChartProps, ChartView};
