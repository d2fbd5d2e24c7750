//! GTK4 binding: embeds a [`ChartView`] into a `gtk::DrawingArea`.
//!
//! The drawing area is the container element: it expands to fill whatever
//! box its parent allocates, the engine paints into it, and its `resize`
//! signal is the content-box observation the adapter subscribes to.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;

use crate::container::{ChartContainer, PixelSize};
use crate::engine::{ChartApi, ChartApiRef, ChartEngine};
use crate::error::{EmbedError, EmbedResult};
use crate::view::{ChartProps, ChartView};

/// [`ChartContainer`] implementation over a `gtk::DrawingArea`.
pub struct GtkChartContainer {
    area: gtk::DrawingArea,
    markup: RefCell<Option<String>>,
}

impl GtkChartContainer {
    #[must_use]
    pub fn new() -> Self {
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);
        Self {
            area,
            markup: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Markup produced by the last server-render pass, if any.
    ///
    /// A drawing area cannot parse markup itself, so the host application
    /// decides how to present it (write it out, hand it to a web view, ...).
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        self.markup.borrow().clone()
    }
}

impl Default for GtkChartContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartContainer for GtkChartContainer {
    type Subscription = glib::SignalHandlerId;

    fn observe(&self, on_resize: Box<dyn FnMut(PixelSize)>) -> Self::Subscription {
        let on_resize = RefCell::new(on_resize);
        self.area.connect_resize(move |_, width, height| {
            (on_resize.borrow_mut())(PixelSize::new(f64::from(width), f64::from(height)));
        })
    }

    fn unobserve(&self, subscription: Self::Subscription) {
        self.area.disconnect(subscription);
    }

    fn set_markup(&self, markup: &str) {
        *self.markup.borrow_mut() = Some(markup.to_owned());
    }
}

/// Widget-owning wrapper that drives a [`ChartView`] from GTK signals.
///
/// Mounts on construction; the instance is disposed on
/// [`detach`](Self::detach) or drop.
pub struct GtkChartView<E>
where
    E: ChartEngine<Container = GtkChartContainer>,
{
    view: RefCell<ChartView<E>>,
    container: Rc<GtkChartContainer>,
}

impl<E> GtkChartView<E>
where
    E: ChartEngine<Container = GtkChartContainer>,
{
    /// Builds the container widget, mounts the adapter, and runs the first
    /// synchronization pass.
    pub fn new(props: &ChartProps) -> EmbedResult<Rc<Self>, E::Error> {
        Self::build(props, None)
    }

    /// Like [`new`](Self::new), additionally mirroring the live instance
    /// handle into `api_ref`.
    pub fn new_with_api_ref(
        props: &ChartProps,
        api_ref: ChartApiRef<E>,
    ) -> EmbedResult<Rc<Self>, E::Error> {
        Self::build(props, Some(api_ref))
    }

    fn build(props: &ChartProps, api_ref: Option<ChartApiRef<E>>) -> EmbedResult<Rc<Self>, E::Error> {
        let container = Rc::new(GtkChartContainer::new());
        let mut view = ChartView::new();
        if let Some(api_ref) = api_ref {
            view.bind_api_ref(api_ref);
        }
        let area = container.drawing_area().clone();
        view.connect_instance_created(move |_| area.queue_draw());
        view.mount(Rc::clone(&container), props)?;
        Ok(Rc::new(Self {
            view: RefCell::new(view),
            container,
        }))
    }

    /// Widget to insert into the application's layout.
    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        self.container.drawing_area()
    }

    /// Runs a synchronization pass with updated props and queues a redraw.
    pub fn update(&self, props: &ChartProps) -> EmbedResult<(), E::Error> {
        self.view.borrow_mut().render(props)?;
        self.container.drawing_area().queue_draw();
        Ok(())
    }

    /// The live engine handle, if an instance exists.
    #[must_use]
    pub fn engine(&self) -> Option<ChartApi<E>> {
        self.view.borrow().api()
    }

    /// Mutates the live engine directly and queues a redraw.
    pub fn update_engine<T>(
        &self,
        operate: impl FnOnce(&mut E) -> Result<T, E::Error>,
    ) -> EmbedResult<T, E::Error> {
        let api = self.engine().ok_or(EmbedError::NotLive)?;
        let value = {
            let mut engine = api.borrow_mut();
            operate(&mut engine).map_err(EmbedError::Engine)?
        };
        self.container.drawing_area().queue_draw();
        Ok(value)
    }

    /// Markup produced by the last server-render pass, if any.
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        self.container.markup()
    }

    /// Unmounts the adapter, disposing the live instance.
    pub fn detach(&self) {
        self.view.borrow_mut().unmount();
    }
}
