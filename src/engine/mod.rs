//! Black-box contract of the external charting engine.
//!
//! Everything chart-shaped (layout, scene graph, painting, markup output)
//! lives behind [`ChartEngine`]. The adapter only decides *when* to call
//! which engine operation; it never interprets chart semantics.

use std::cell::RefCell;
use std::rc::Rc;

use crate::container::{ChartContainer, PixelSize};
use crate::option::{ChartOption, InitOptions, Theme, UpdateOpts};

mod null_engine;

pub use null_engine::{
    AppliedUpdate, CallEvent, CallLog, NullChartEngine, NullContainer, NullEngineError,
    NullSubscription, call_log,
};

/// Shared handle to a live chart instance.
///
/// Handed out to the embedding application for direct engine access (event
/// binding, snapshot export, manual API calls). The adapter offers no
/// synchronization around it: callers must not interleave their own engine
/// calls with an in-progress adapter pass.
pub type ChartApi<E> = Rc<RefCell<E>>;

/// External cell the adapter populates with the live instance handle.
///
/// Cleared whenever the instance is disposed, repopulated on recreation.
pub type ChartApiRef<E> = Rc<RefCell<Option<ChartApi<E>>>>;

/// Creates an empty api-ref cell to bind to a chart view.
#[must_use]
pub fn chart_api_ref<E>() -> ChartApiRef<E> {
    Rc::new(RefCell::new(None))
}

/// Contract implemented by the external charting engine.
///
/// Construction parameters (theme, [`InitOptions`]) are write-once: the
/// engine offers no way to change them on a live instance, which is why the
/// adapter destroys and recreates instead of diffing. Failures are
/// engine-defined and surface to the embedding application untranslated.
pub trait ChartEngine: Sized + 'static {
    /// Host container type the engine paints into.
    type Container: ChartContainer;
    /// Engine-defined failure type.
    type Error: std::error::Error + 'static;

    /// Creates one chart instance bound to `container`.
    ///
    /// `container` is `None` exactly when `init.ssr` is set; the instance
    /// then produces markup via [`render_to_svg_string`](Self::render_to_svg_string)
    /// instead of painting live.
    fn init(
        container: Option<&Self::Container>,
        theme: Option<&Theme>,
        init: &InitOptions,
    ) -> Result<Self, Self::Error>;

    /// Pushes a declarative option into the live instance.
    ///
    /// `opts` selects the update mode; see [`crate::option::plan_update`]
    /// for the merge-by-id semantics a conforming engine applies.
    fn apply_option(&mut self, option: &ChartOption, opts: &UpdateOpts) -> Result<(), Self::Error>;

    /// Resizes the instance to `size` pixels.
    fn resize(&mut self, size: PixelSize) -> Result<(), Self::Error>;

    /// Produces the server-render markup for the current option state.
    fn render_to_svg_string(&mut self) -> Result<String, Self::Error>;

    /// Releases the instance's internal resources.
    ///
    /// Idempotent: calling it on an already-disposed instance is a no-op.
    fn dispose(&mut self);
}
