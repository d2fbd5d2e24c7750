//! The chart adapter: binds one engine instance to one container and keeps
//! it synchronized with declarative props and layout size.
//!
//! [`ChartView`] is driven by the component binding through the
//! [`mount`](ChartView::mount), [`render`](ChartView::render) and
//! [`unmount`](ChartView::unmount) lifecycle entry points, plus the
//! container's content-box observation, which the view installs itself. All
//! work is synchronous on the UI thread; there is no pending chart state.

mod identity;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::container::{ChartContainer, PixelSize};
use crate::engine::{ChartApi, ChartApiRef, ChartEngine};
use crate::error::{EmbedError, EmbedResult};
use crate::option::{ChartOption, InitOptions, Theme, UpdateOpts};

use identity::InstanceIdentity;

/// Declarative inputs of one synchronization pass.
///
/// `theme` and `init_options` are identity-keyed: passing a new `Rc`, even
/// around an equal value, destroys and recreates the chart instance, since
/// the engine cannot change either on a live chart. `option` and
/// `update_opts` never trigger recreation.
#[derive(Debug, Clone, Default)]
pub struct ChartProps {
    pub option: ChartOption,
    pub theme: Option<Rc<Theme>>,
    pub init_options: Option<Rc<InitOptions>>,
    /// Shallow-merged over [`UpdateOpts::adapter_default`] on every update
    /// call.
    pub update_opts: Option<UpdateOpts>,
}

impl ChartProps {
    #[must_use]
    pub fn new(option: ChartOption) -> Self {
        Self {
            option,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Rc<Theme>) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_init_options(mut self, init_options: Rc<InitOptions>) -> Self {
        self.init_options = Some(init_options);
        self
    }

    #[must_use]
    pub fn with_update_opts(mut self, update_opts: UpdateOpts) -> Self {
        self.update_opts = Some(update_opts);
        self
    }
}

/// Adapter owning at most one live chart instance per mounted container.
///
/// The instance handle is exposed outward unproxied (see
/// [`api`](Self::api)); the adapter does not wrap the engine's API surface.
pub struct ChartView<E: ChartEngine> {
    container: Option<Rc<E::Container>>,
    subscription: Option<<E::Container as ChartContainer>::Subscription>,
    /// Stable across recreations; the resize observation reads through it so
    /// it always reaches the instance of the current generation.
    live: Rc<RefCell<Option<ChartApi<E>>>>,
    identity: Option<InstanceIdentity>,
    /// Substituted when props carry no init options, so an absent prop is
    /// identity-stable and never retriggers recreation.
    default_init: Rc<InitOptions>,
    api_ref: Option<ChartApiRef<E>>,
    on_instance_created: Option<Box<dyn Fn(&ChartApi<E>)>>,
}

impl<E: ChartEngine> Default for ChartView<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ChartEngine> ChartView<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: None,
            subscription: None,
            live: Rc::new(RefCell::new(None)),
            identity: None,
            default_init: Rc::new(InitOptions::default()),
            api_ref: None,
            on_instance_created: None,
        }
    }

    /// Binds an external cell that mirrors the live instance handle.
    #[must_use]
    pub fn with_api_ref(mut self, api_ref: ChartApiRef<E>) -> Self {
        self.api_ref = Some(api_ref);
        self
    }

    /// See [`with_api_ref`](Self::with_api_ref).
    pub fn bind_api_ref(&mut self, api_ref: ChartApiRef<E>) {
        self.api_ref = Some(api_ref);
    }

    /// Registers a callback fired after every instantiation, so the owning
    /// component can schedule a follow-up pass once the instance exists.
    pub fn connect_instance_created(&mut self, callback: impl Fn(&ChartApi<E>) + 'static) {
        self.on_instance_created = Some(Box::new(callback));
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    /// Whether a live chart instance currently exists.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.borrow().is_some()
    }

    /// The live instance handle, if any.
    #[must_use]
    pub fn api(&self) -> Option<ChartApi<E>> {
        self.live.borrow().clone()
    }

    /// Mounts onto `container` and runs the first synchronization pass.
    pub fn mount(
        &mut self,
        container: Rc<E::Container>,
        props: &ChartProps,
    ) -> EmbedResult<(), E::Error> {
        if self.container.is_some() {
            return Err(EmbedError::AlreadyMounted);
        }
        self.container = Some(container);
        self.render(props)
    }

    /// Runs one synchronization pass against the mounted container.
    ///
    /// Resolves the instance first (create, reuse, or destroy-and-recreate
    /// on identity change), then re-asserts an explicit size, applies the
    /// configuration, and refreshes server-render markup. Engine failures
    /// propagate untranslated; a failed instantiation leaves no live
    /// instance and the next pass re-attempts from scratch.
    pub fn render(&mut self, props: &ChartProps) -> EmbedResult<(), E::Error> {
        let Some(container) = self.container.clone() else {
            return Err(EmbedError::NotMounted);
        };
        let theme = props.theme.clone();
        let init = props
            .init_options
            .clone()
            .unwrap_or_else(|| Rc::clone(&self.default_init));

        let api = match self.api() {
            Some(api)
                if self
                    .identity
                    .as_ref()
                    .is_some_and(|identity| identity.matches(theme.as_ref(), &init)) =>
            {
                api
            }
            _ => self.recreate(&container, theme, Rc::clone(&init))?,
        };

        // Fixed-size instances re-assert their explicit size on every pass.
        if let Some(size) = init.explicit_size() {
            api.borrow_mut()
                .resize(size)
                .map_err(EmbedError::Engine)?;
        }

        let defaults = UpdateOpts::adapter_default();
        let opts = match &props.update_opts {
            Some(overrides) => overrides.merged_over(&defaults),
            None => defaults,
        };
        api.borrow_mut()
            .apply_option(&props.option, &opts)
            .map_err(EmbedError::Engine)?;
        trace!(series = props.option.series.len(), "applied chart option");

        if init.ssr {
            let markup = api
                .borrow_mut()
                .render_to_svg_string()
                .map_err(EmbedError::Engine)?;
            container.set_markup(&markup);
        }
        Ok(())
    }

    /// Releases the live instance and detaches from the container.
    ///
    /// Safe to call when already unmounted.
    pub fn unmount(&mut self) {
        self.release_instance();
        self.container = None;
    }

    fn recreate(
        &mut self,
        container: &Rc<E::Container>,
        theme: Option<Rc<Theme>>,
        init: Rc<InitOptions>,
    ) -> EmbedResult<ChartApi<E>, E::Error> {
        self.release_instance();

        debug!(ssr = init.ssr, "instantiating chart engine");
        self.subscription = Some(container.observe(self.resize_callback(&init)));
        let engine = E::init(
            (!init.ssr).then_some(container.as_ref()),
            theme.as_deref(),
            &init,
        )
        .map_err(EmbedError::Engine)?;

        let api: ChartApi<E> = Rc::new(RefCell::new(engine));
        *self.live.borrow_mut() = Some(Rc::clone(&api));
        if let Some(cell) = &self.api_ref {
            *cell.borrow_mut() = Some(Rc::clone(&api));
        }
        self.identity = Some(InstanceIdentity { theme, init });
        if let Some(callback) = &self.on_instance_created {
            callback(&api);
        }
        Ok(api)
    }

    /// Tears down the current generation: the observation is released
    /// strictly before the instance it feeds is disposed.
    fn release_instance(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            if let Some(container) = &self.container {
                container.unobserve(subscription);
            }
        }
        if let Some(api) = self.live.borrow_mut().take() {
            debug!("disposing chart engine instance");
            api.borrow_mut().dispose();
        }
        if let Some(cell) = &self.api_ref {
            *cell.borrow_mut() = None;
        }
        self.identity = None;
    }

    fn resize_callback(&self, init: &InitOptions) -> Box<dyn FnMut(PixelSize)> {
        let live = Rc::downgrade(&self.live);
        // An explicit size pins auto-sizing off for this generation.
        let pinned = init.explicit_size().is_some();
        Box::new(move |size| {
            if pinned {
                return;
            }
            let Some(cell) = live.upgrade() else {
                return;
            };
            let api = cell.borrow().clone();
            if let Some(api) = api {
                trace!(
                    width = size.width,
                    height = size.height,
                    "container content box changed"
                );
                if let Err(error) = api.borrow_mut().resize(size) {
                    // There is no caller to return to from a layout
                    // observation, so the failure is only reported.
                    warn!(%error, "engine resize failed");
                }
            }
        })
    }
}

impl<E: ChartEngine> Drop for ChartView<E> {
    fn drop(&mut self) {
        self.release_instance();
    }
}
