//! Pinch scale detection for touch screens and trackpads.
//!
//! Two adapters feed one [`ScaleCell`]: a touch tracker that follows the distance
//! between two fingers, and a trackpad adapter that turns ctrl-modified wheel
//! ticks into multiplicative nudges. The cell starts at 1.0.

pub mod binding;
pub mod config;
pub mod error;
pub mod hooks;
pub mod input;
pub mod scale;
pub mod touch;
pub mod trackpad;
pub mod web;

pub use binding::{
    EventSource, ListenerHandle, ListenerOptions, ListenerScope, PinchEventKind, PinchScale,
    PinchScaleOptions, bind_pinch_scale, bind_pinch_scale_to,
};
pub use config::{PinchConfig, PreventDefault};
pub use error::PinchError;
pub use hooks::{UsePinchScaleHandle, UsePinchScaleOptions, use_pinch_scale};
pub use input::{TouchFrame, TouchInput, TouchPoint, WheelInput, WheelTick};
pub use scale::{ScaleCell, Subscription};
pub use touch::{PinchState, TouchPinchTracker, TouchSession};
pub use trackpad::{TrackpadPinchAdapter, wheel_factor};
pub use web::WebEventSource;
