//! Recording engine and container used by tests and headless embedding.
//!
//! Both doubles append to one shared [`CallLog`], so tests can assert the
//! relative order of boundary calls (observe, init, dispose, markup) across
//! the engine/container seam.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::container::{ChartContainer, PixelSize};
use crate::option::{ChartOption, InitOptions, Theme, UpdateOpts, UpdatePlan, plan_update};

use super::ChartEngine;

/// One recorded boundary call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum CallEvent {
    Observe,
    Unobserve,
    Init { container_bound: bool },
    ApplyOption { series: usize },
    Resize(PixelSize),
    RenderToSvg,
    SetMarkup { bytes: usize },
    Dispose,
}

/// Shared call-sequence log.
pub type CallLog = Rc<RefCell<Vec<CallEvent>>>;

/// Creates an empty shared call log.
#[must_use]
pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Handle for one observation installed on a [`NullContainer`].
#[derive(Debug)]
pub struct NullSubscription(());

/// Recording container double.
///
/// Stores the installed resize callback so tests can simulate content-box
/// changes with [`emit_resize`](Self::emit_resize), and captures markup set
/// under server-render mode.
pub struct NullContainer {
    log: CallLog,
    on_resize: RefCell<Option<Box<dyn FnMut(PixelSize)>>>,
    markup: RefCell<Option<String>>,
}

impl NullContainer {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            on_resize: RefCell::new(None),
            markup: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    /// Markup set by the last server-render pass, if any.
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        self.markup.borrow().clone()
    }

    /// Simulates one content-box change reported by the host layout system.
    ///
    /// No-op when no observation is installed.
    pub fn emit_resize(&self, size: PixelSize) {
        let callback = self.on_resize.borrow_mut().take();
        if let Some(mut callback) = callback {
            callback(size);
            let mut slot = self.on_resize.borrow_mut();
            if slot.is_none() {
                *slot = Some(callback);
            }
        }
    }

    #[must_use]
    pub fn is_observed(&self) -> bool {
        self.on_resize.borrow().is_some()
    }
}

impl ChartContainer for NullContainer {
    type Subscription = NullSubscription;

    fn observe(&self, on_resize: Box<dyn FnMut(PixelSize)>) -> Self::Subscription {
        self.log.borrow_mut().push(CallEvent::Observe);
        *self.on_resize.borrow_mut() = Some(on_resize);
        NullSubscription(())
    }

    fn unobserve(&self, subscription: Self::Subscription) {
        let NullSubscription(()) = subscription;
        self.log.borrow_mut().push(CallEvent::Unobserve);
        *self.on_resize.borrow_mut() = None;
    }

    fn set_markup(&self, markup: &str) {
        self.log.borrow_mut().push(CallEvent::SetMarkup {
            bytes: markup.len(),
        });
        *self.markup.borrow_mut() = Some(markup.to_owned());
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum NullEngineError {
    #[error("invalid explicit size: width={width}, height={height}")]
    InvalidSize { width: f64, height: f64 },
}

/// One recorded update call.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedUpdate {
    pub plan: UpdatePlan,
    pub opts: UpdateOpts,
}

/// No-op engine used by tests and headless embedding.
///
/// It retains the last applied option and resolves the update plan of every
/// update call, so merge-by-id behavior is observable without a real engine.
#[derive(Debug)]
pub struct NullChartEngine {
    log: Option<CallLog>,
    container_bound: bool,
    theme: Option<Theme>,
    init_options: InitOptions,
    current_option: Option<ChartOption>,
    applied: Vec<AppliedUpdate>,
    resizes: Vec<PixelSize>,
    svg_renders: usize,
    disposed: bool,
}

impl NullChartEngine {
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether init received a container to paint into.
    #[must_use]
    pub fn container_bound(&self) -> bool {
        self.container_bound
    }

    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn init_options(&self) -> &InitOptions {
        &self.init_options
    }

    /// The option state after the last update call.
    #[must_use]
    pub fn current_option(&self) -> Option<&ChartOption> {
        self.current_option.as_ref()
    }

    #[must_use]
    pub fn applied(&self) -> &[AppliedUpdate] {
        &self.applied
    }

    #[must_use]
    pub fn resizes(&self) -> &[PixelSize] {
        &self.resizes
    }

    #[must_use]
    pub fn svg_renders(&self) -> usize {
        self.svg_renders
    }

    fn record(&self, event: CallEvent) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(event);
        }
    }
}

impl ChartEngine for NullChartEngine {
    type Container = NullContainer;
    type Error = NullEngineError;

    fn init(
        container: Option<&Self::Container>,
        theme: Option<&Theme>,
        init: &InitOptions,
    ) -> Result<Self, Self::Error> {
        if let Some(size) = init.explicit_size() {
            if !size.is_valid() {
                return Err(NullEngineError::InvalidSize {
                    width: size.width,
                    height: size.height,
                });
            }
        }

        let log = container.map(NullContainer::log);
        if let Some(log) = &log {
            log.borrow_mut().push(CallEvent::Init {
                container_bound: true,
            });
        }
        Ok(Self {
            log,
            container_bound: container.is_some(),
            theme: theme.cloned(),
            init_options: init.clone(),
            current_option: None,
            applied: Vec::new(),
            resizes: Vec::new(),
            svg_renders: 0,
            disposed: false,
        })
    }

    fn apply_option(&mut self, option: &ChartOption, opts: &UpdateOpts) -> Result<(), Self::Error> {
        let plan = plan_update(self.current_option.as_ref(), option, opts);
        self.record(CallEvent::ApplyOption {
            series: option.series.len(),
        });
        self.applied.push(AppliedUpdate {
            plan,
            opts: opts.clone(),
        });
        self.current_option = Some(option.clone());
        Ok(())
    }

    fn resize(&mut self, size: PixelSize) -> Result<(), Self::Error> {
        debug_assert!(!self.disposed, "resize on a disposed chart instance");
        self.record(CallEvent::Resize(size));
        self.resizes.push(size);
        Ok(())
    }

    fn render_to_svg_string(&mut self) -> Result<String, Self::Error> {
        self.record(CallEvent::RenderToSvg);
        self.svg_renders += 1;
        let size = self
            .init_options
            .explicit_size()
            .unwrap_or_else(|| PixelSize::new(0.0, 0.0));
        let series = self
            .current_option
            .as_ref()
            .map_or(0, |option| option.series.len());
        Ok(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" data-series="{series}"></svg>"#,
            size.width, size.height,
        ))
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.record(CallEvent::Dispose);
    }
}
