use web_sys::{EventTarget, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::binding::{PinchScaleOptions, bind_pinch_scale_to};
use crate::config::PinchConfig;
use crate::scale::ScaleCell;
use crate::web::WebEventSource;

#[derive(Clone, PartialEq)]
pub struct UsePinchScaleOptions {
    pub prevent_default: bool,
    pub config: PinchConfig,
    pub on_touch_start: Option<Callback<TouchEvent>>,
    pub on_touch_move: Option<Callback<TouchEvent>>,
    pub on_touch_end: Option<Callback<TouchEvent>>,
    pub on_trackpad_pinch: Option<Callback<WheelEvent>>,
}

impl Default for UsePinchScaleOptions {
    fn default() -> Self {
        Self {
            prevent_default: true,
            config: PinchConfig::default(),
            on_touch_start: None,
            on_touch_move: None,
            on_touch_end: None,
            on_trackpad_pinch: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UsePinchScaleHandle {
    cell: ScaleCell,
    value: f64,
}

impl UsePinchScaleHandle {
    /// Scale as of this render.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn cell(&self) -> &ScaleCell {
        &self.cell
    }

    pub fn set(&self, value: f64) {
        self.cell.set(value);
    }

    pub fn reset(&self) {
        self.cell.set(1.0);
    }
}

/// Pinch scale for the element behind `target`.
///
/// The scale lives as long as the component. Listeners are re-attached when the
/// target or the options change, and the component re-renders on every change
/// of the scale.
#[hook]
pub fn use_pinch_scale(target: NodeRef, options: UsePinchScaleOptions) -> UsePinchScaleHandle {
    let cell = use_memo((), |_| ScaleCell::default());
    let value = use_state(|| cell.get());

    {
        let cell = (*cell).clone();
        let value = value.clone();
        use_effect_with((), move |_| {
            let subscription = cell.subscribe(move |v| value.set(v));
            move || drop(subscription)
        });
    }
    {
        let cell = (*cell).clone();
        use_effect_with((target, options), move |(target, options)| {
            let binding = WebEventSource::from_window().map(|source| {
                let pinch_options = PinchScaleOptions::<WebEventSource> {
                    target: target.get().map(EventTarget::from),
                    prevent_default: options.prevent_default.into(),
                    config: options.config,
                    on_touch_start: options.on_touch_start.clone(),
                    on_touch_move: options.on_touch_move.clone(),
                    on_touch_end: options.on_touch_end.clone(),
                    on_trackpad_pinch: options.on_trackpad_pinch.clone(),
                };
                bind_pinch_scale_to(&source, cell, pinch_options)
            });
            if binding.is_none() {
                log::debug!("no window, pinch scale hook stays inert");
            }
            move || drop(binding)
        });
    }

    UsePinchScaleHandle {
        cell: (*cell).clone(),
        value: *value,
    }
}
