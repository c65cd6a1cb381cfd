//! Browser event source over `web_sys`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent, WheelEvent, Window};

use crate::binding::{EventSource, ListenerHandle, ListenerOptions, PinchEventKind};
use crate::error::PinchError;
use crate::input::{TouchInput, TouchPoint, WheelInput};

impl TouchInput for TouchEvent {
    fn touch_count(&self) -> usize {
        self.touches().length() as usize
    }

    fn touch(&self, index: usize) -> Option<TouchPoint> {
        let t = self.touches().item(index as u32)?;
        Some(TouchPoint::new(t.identifier(), t.page_x() as f64, t.page_y() as f64))
    }

    fn prevent_default(&self) {
        let event: &Event = self.as_ref();
        event.prevent_default();
    }
}

impl WheelInput for WheelEvent {
    fn delta_y(&self) -> f64 {
        WheelEvent::delta_y(self)
    }

    fn ctrl_key(&self) -> bool {
        let mouse: &MouseEvent = self.as_ref();
        mouse.ctrl_key()
    }

    fn meta_key(&self) -> bool {
        let mouse: &MouseEvent = self.as_ref();
        mouse.meta_key()
    }

    fn prevent_default(&self) {
        let event: &Event = self.as_ref();
        event.prevent_default();
    }
}

/// Listens on DOM event targets; the window is the global surface.
#[derive(Clone, Debug)]
pub struct WebEventSource {
    window: Window,
}

impl WebEventSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// `None` outside a browser main thread.
    pub fn from_window() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl EventSource for WebEventSource {
    type Target = EventTarget;
    type Touch = TouchEvent;
    type Wheel = WheelEvent;

    fn global_surface(&self) -> EventTarget {
        let target: &EventTarget = self.window.as_ref();
        target.clone()
    }

    fn listen_touch(
        &self,
        target: &EventTarget,
        kind: PinchEventKind,
        options: ListenerOptions,
        handler: Box<dyn Fn(&TouchEvent)>,
    ) -> Result<ListenerHandle, PinchError> {
        listen(target, kind, options, handler)
    }

    fn listen_wheel(
        &self,
        target: &EventTarget,
        options: ListenerOptions,
        handler: Box<dyn Fn(&WheelEvent)>,
    ) -> Result<ListenerHandle, PinchError> {
        listen(target, PinchEventKind::Wheel, options, handler)
    }
}

fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    kind: PinchEventKind,
    options: ListenerOptions,
    handler: Box<dyn Fn(&E)>,
) -> Result<ListenerHandle, PinchError> {
    let name = kind.event_name();
    let closure = Closure::wrap(Box::new(move |e: Event| match e.dyn_into::<E>() {
        Ok(e) => handler(&e),
        Err(_) => log::warn!("unexpected event type for {name}"),
    }) as Box<dyn FnMut(_)>);

    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|err| PinchError::Listen {
            event: name,
            reason: js_error_reason(&err),
        })?;

    let target = target.clone();
    let capture = options.capture;
    Ok(ListenerHandle::new(move || {
        let _ = target.remove_event_listener_with_callback_and_bool(
            name,
            closure.as_ref().unchecked_ref(),
            capture,
        );
    }))
}

fn js_error_reason(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
