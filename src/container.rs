//! Container-side contract of the embedding boundary.
//!
//! The adapter never talks to a concrete widget toolkit directly; it drives
//! whatever implements [`ChartContainer`]. The GTK4 implementation lives in
//! `platform_gtk`, the recording test double in [`crate::engine`].

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a container content box or an explicit chart size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Contract implemented by the host-side container a chart is embedded into.
///
/// A container occupies the full box its parent allocates to it. The adapter
/// installs exactly one content-box observation per live instance and always
/// releases it before disposing the instance it feeds, so an observation can
/// never resize a disposed chart.
pub trait ChartContainer {
    /// Opaque handle for one installed content-box observation.
    type Subscription;

    /// Installs a content-box observer. The callback fires synchronously on
    /// the UI thread whenever the container's layout size changes.
    fn observe(&self, on_resize: Box<dyn FnMut(PixelSize)>) -> Self::Subscription;

    /// Releases a previously installed observation.
    fn unobserve(&self, subscription: Self::Subscription);

    /// Replaces the container's rendered content with static markup.
    ///
    /// Only used under server-render mode, where the engine never paints the
    /// container itself.
    fn set_markup(&self, markup: &str);
}
