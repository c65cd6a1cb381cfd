//! Two-finger pinch recognition on touch surfaces.

use std::cell::Cell;

use yew::Callback;

use crate::config::PreventDefault;
use crate::input::{TouchInput, touch_distance};
use crate::scale::ScaleCell;

/// Snapshot taken when a pinch begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSession {
    /// Distance between the first two contacts, in page pixels.
    pub start_distance: f64,
    /// Scale value at the moment the pinch began.
    pub start_scale: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PinchState {
    #[default]
    Idle,
    Pinching(TouchSession),
}

pub struct TouchPinchTracker<T: TouchInput> {
    scale: ScaleCell,
    prevent_default: PreventDefault,
    end_on_contact_loss: bool,
    state: Cell<PinchState>,
    on_start: Option<Callback<T>>,
    on_move: Option<Callback<T>>,
    on_end: Option<Callback<T>>,
}

impl<T: TouchInput> TouchPinchTracker<T> {
    pub fn new(scale: ScaleCell, prevent_default: PreventDefault) -> Self {
        Self {
            scale,
            prevent_default,
            end_on_contact_loss: false,
            state: Cell::new(PinchState::Idle),
            on_start: None,
            on_move: None,
            on_end: None,
        }
    }

    pub fn with_end_on_contact_loss(mut self, enabled: bool) -> Self {
        self.end_on_contact_loss = enabled;
        self
    }

    pub fn with_callbacks(
        mut self,
        on_start: Option<Callback<T>>,
        on_move: Option<Callback<T>>,
        on_end: Option<Callback<T>>,
    ) -> Self {
        self.on_start = on_start;
        self.on_move = on_move;
        self.on_end = on_end;
        self
    }

    pub fn state(&self) -> PinchState {
        self.state.get()
    }

    pub fn session(&self) -> Option<TouchSession> {
        match self.state.get() {
            PinchState::Pinching(session) => Some(session),
            PinchState::Idle => None,
        }
    }

    pub fn is_pinching(&self) -> bool {
        self.session().is_some()
    }

    /// Starts a session when two or more contacts are down. Returns whether the
    /// event was consumed.
    pub fn on_touch_start(&self, event: &T) -> bool {
        if event.touch_count() < 2 {
            return false;
        }
        let Some(start_distance) = touch_distance(event) else {
            return false;
        };
        if self.prevent_default.get() {
            event.prevent_default();
        }
        let session = TouchSession {
            start_distance,
            start_scale: self.scale.get(),
        };
        self.state.set(PinchState::Pinching(session));
        log::debug!(
            "pinch session started: distance={} scale={}",
            session.start_distance,
            session.start_scale
        );
        if let Some(cb) = &self.on_start {
            cb.emit(event.clone());
        }
        true
    }

    pub fn on_touch_move(&self, event: &T) -> bool {
        let Some(session) = self.session() else {
            return false;
        };
        let Some(current) = touch_distance(event) else {
            if self.end_on_contact_loss {
                self.state.set(PinchState::Idle);
                log::debug!("pinch session dropped: fewer than two contacts");
                return false;
            }
            if self.prevent_default.get() {
                event.prevent_default();
            }
            if let Some(cb) = &self.on_move {
                cb.emit(event.clone());
            }
            return true;
        };
        if self.prevent_default.get() {
            event.prevent_default();
        }
        // A zero start distance yields a non-finite scale; that is left to the host.
        let proportion = current / session.start_distance;
        let next = session.start_scale * proportion;
        log::trace!("pinch move: distance={current} scale={next}");
        self.scale.set(next);
        if let Some(cb) = &self.on_move {
            cb.emit(event.clone());
        }
        true
    }

    /// Ends the session. The last scale value is kept.
    pub fn on_touch_end(&self, event: &T) -> bool {
        if !self.is_pinching() {
            return false;
        }
        self.state.set(PinchState::Idle);
        log::debug!("pinch session ended: scale={}", self.scale.get());
        if let Some(cb) = &self.on_end {
            cb.emit(event.clone());
        }
        true
    }
}
