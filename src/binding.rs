//! Wires the adapters to an event source.
//!
//! Touch-start and wheel are heard on the target. Touch-move and touch-end are
//! heard on the global surface so a pinch that leaves the target is still
//! tracked and closed.

use std::rc::Rc;

use yew::Callback;

use crate::config::{PinchConfig, PreventDefault};
use crate::error::PinchError;
use crate::input::{TouchInput, WheelInput};
use crate::scale::ScaleCell;
use crate::touch::TouchPinchTracker;
use crate::trackpad::TrackpadPinchAdapter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinchEventKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    Wheel,
}

impl PinchEventKind {
    /// DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Wheel => "wheel",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
}

/// Detaches one listener when dropped.
#[must_use = "dropping the handle detaches the listener"]
pub struct ListenerHandle {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A handle with nothing to detach.
    pub fn noop() -> Self {
        Self { detach: None }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// All listeners of one binding, released together.
#[derive(Default)]
pub struct ListenerScope {
    handles: Vec<ListenerHandle>,
}

impl ListenerScope {
    pub fn push(&mut self, handle: ListenerHandle) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn release(&mut self) {
        self.handles.clear();
    }
}

/// Somewhere events come from: a browser window, a test double.
pub trait EventSource {
    type Target: Clone;
    type Touch: TouchInput + 'static;
    type Wheel: WheelInput + 'static;

    /// The window-equivalent surface that hears every event.
    fn global_surface(&self) -> Self::Target;

    fn listen_touch(
        &self,
        target: &Self::Target,
        kind: PinchEventKind,
        options: ListenerOptions,
        handler: Box<dyn Fn(&Self::Touch)>,
    ) -> Result<ListenerHandle, PinchError>;

    fn listen_wheel(
        &self,
        target: &Self::Target,
        options: ListenerOptions,
        handler: Box<dyn Fn(&Self::Wheel)>,
    ) -> Result<ListenerHandle, PinchError>;
}

pub struct PinchScaleOptions<E: EventSource> {
    /// Element that hears touch-start and wheel. Falls back to the global surface.
    pub target: Option<E::Target>,
    pub prevent_default: PreventDefault,
    pub config: PinchConfig,
    pub on_touch_start: Option<Callback<E::Touch>>,
    pub on_touch_move: Option<Callback<E::Touch>>,
    pub on_touch_end: Option<Callback<E::Touch>>,
    pub on_trackpad_pinch: Option<Callback<E::Wheel>>,
}

impl<E: EventSource> Default for PinchScaleOptions<E> {
    fn default() -> Self {
        Self {
            target: None,
            prevent_default: PreventDefault::default(),
            config: PinchConfig::default(),
            on_touch_start: None,
            on_touch_move: None,
            on_touch_end: None,
            on_trackpad_pinch: None,
        }
    }
}

impl<E: EventSource> PinchScaleOptions<E> {
    pub fn with_target(mut self, target: E::Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_prevent_default(mut self, prevent_default: impl Into<PreventDefault>) -> Self {
        self.prevent_default = prevent_default.into();
        self
    }

    pub fn with_config(mut self, config: PinchConfig) -> Self {
        self.config = config;
        self
    }
}

/// A bound scale. Dropping it detaches every listener.
pub struct PinchScale {
    scale: ScaleCell,
    listeners: ListenerScope,
}

impl PinchScale {
    /// A scale with no listeners, fixed at 1.0 unless the host writes it.
    pub fn inert() -> Self {
        Self {
            scale: ScaleCell::default(),
            listeners: ListenerScope::default(),
        }
    }

    pub fn scale(&self) -> &ScaleCell {
        &self.scale
    }

    pub fn get(&self) -> f64 {
        self.scale.get()
    }

    pub fn is_bound(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Drops the listeners and hands back the cell with its last value.
    pub fn detach(mut self) -> ScaleCell {
        self.listeners.release();
        self.scale.clone()
    }
}

/// Binds a fresh scale (starting at 1.0) to `source`.
///
/// With no source the result is inert: the scale stays at 1.0 and nothing is
/// listened to.
pub fn bind_pinch_scale<E: EventSource>(
    source: Option<&E>,
    options: PinchScaleOptions<E>,
) -> PinchScale {
    let Some(source) = source else {
        log::debug!("no event source, pinch scale is inert");
        return PinchScale::inert();
    };
    bind_pinch_scale_to(source, ScaleCell::default(), options)
}

/// Binds an existing scale cell to `source`.
///
/// A config that fails [`PinchConfig::validate`] is logged and replaced by the
/// defaults.
pub fn bind_pinch_scale_to<E: EventSource>(
    source: &E,
    scale: ScaleCell,
    options: PinchScaleOptions<E>,
) -> PinchScale {
    let PinchScaleOptions {
        target,
        prevent_default,
        config,
        on_touch_start,
        on_touch_move,
        on_touch_end,
        on_trackpad_pinch,
    } = options;
    let config = config.or_default();

    let surface = source.global_surface();
    let target = target.unwrap_or_else(|| surface.clone());
    let listener_options = ListenerOptions {
        passive: !prevent_default.get(),
        capture: config.capture,
    };

    let tracker = Rc::new(
        TouchPinchTracker::new(scale.clone(), prevent_default.clone())
            .with_end_on_contact_loss(config.end_on_contact_loss)
            .with_callbacks(on_touch_start, on_touch_move, on_touch_end),
    );
    let trackpad = Rc::new(
        TrackpadPinchAdapter::new(scale.clone(), prevent_default, config)
            .with_callback(on_trackpad_pinch),
    );

    let mut listeners = ListenerScope::default();
    let mut keep = |kind: PinchEventKind, result: Result<ListenerHandle, PinchError>| {
        match result {
            Ok(handle) => listeners.push(handle),
            Err(err) => log::warn!(
                "pinch listener for {} not attached: {err}",
                kind.event_name()
            ),
        }
    };

    {
        let tracker = tracker.clone();
        keep(
            PinchEventKind::TouchStart,
            source.listen_touch(
                &target,
                PinchEventKind::TouchStart,
                listener_options,
                Box::new(move |e: &E::Touch| {
                    tracker.on_touch_start(e);
                }),
            ),
        );
    }
    {
        let tracker = tracker.clone();
        keep(
            PinchEventKind::TouchMove,
            source.listen_touch(
                &surface,
                PinchEventKind::TouchMove,
                listener_options,
                Box::new(move |e: &E::Touch| {
                    tracker.on_touch_move(e);
                }),
            ),
        );
    }
    keep(
        PinchEventKind::TouchEnd,
        source.listen_touch(
            &surface,
            PinchEventKind::TouchEnd,
            listener_options,
            Box::new(move |e: &E::Touch| {
                tracker.on_touch_end(e);
            }),
        ),
    );
    keep(
        PinchEventKind::Wheel,
        source.listen_wheel(
            &target,
            listener_options,
            Box::new(move |e: &E::Wheel| {
                trackpad.on_wheel(e);
            }),
        ),
    );

    log::debug!(
        "pinch scale bound: {} listeners, passive={}",
        listeners.len(),
        listener_options.passive
    );
    PinchScale { scale, listeners }
}
