//! Trackpad pinch: ctrl-modified wheel events nudging the scale.

use yew::Callback;

use crate::config::{PinchConfig, PreventDefault};
use crate::input::WheelInput;
use crate::scale::ScaleCell;

/// Multiplicative factor for one wheel tick, clamped to the configured bounds.
///
/// Negative deltas (pinch out) give `1 - d/100`, positive deltas give the
/// reciprocal form `1 / (1 + d/100)`, so a tick and its opposite cancel out.
///
/// # Panics
///
/// If `config` does not pass [`PinchConfig::validate`] the clamp bounds may be
/// out of order or NaN.
pub fn wheel_factor(delta_y: f64, config: &PinchConfig) -> f64 {
    let step = delta_y / config.wheel_delta_divisor;
    let factor = if delta_y <= 0.0 {
        1.0 - step
    } else {
        1.0 / (1.0 + step)
    };
    factor.clamp(config.min_factor, config.max_factor)
}

pub struct TrackpadPinchAdapter<W: WheelInput> {
    scale: ScaleCell,
    prevent_default: PreventDefault,
    config: PinchConfig,
    on_pinch: Option<Callback<W>>,
}

impl<W: WheelInput> TrackpadPinchAdapter<W> {
    /// An invalid `config` is replaced by the defaults.
    pub fn new(scale: ScaleCell, prevent_default: PreventDefault, config: PinchConfig) -> Self {
        Self {
            scale,
            prevent_default,
            config: config.or_default(),
            on_pinch: None,
        }
    }

    pub fn with_callback(mut self, on_pinch: Option<Callback<W>>) -> Self {
        self.on_pinch = on_pinch;
        self
    }

    pub fn is_pinch(&self, event: &W) -> bool {
        event.ctrl_key() || (self.config.meta_key_pinch && event.meta_key())
    }

    /// Applies one wheel event. Plain scrolls are left alone and return `false`.
    pub fn on_wheel(&self, event: &W) -> bool {
        if !self.is_pinch(event) {
            return false;
        }
        if self.prevent_default.get() {
            event.prevent_default();
        }
        let factor = wheel_factor(event.delta_y(), &self.config);
        self.scale.update(|scale| scale * factor);
        log::trace!(
            "trackpad pinch: delta_y={} factor={factor} scale={}",
            event.delta_y(),
            self.scale.get()
        );
        if let Some(cb) = &self.on_pinch {
            cb.emit(event.clone());
        }
        true
    }
}
