//! Host-agnostic view of the events the pinch adapters consume.
//!
//! Browser events implement these traits in [`crate::web`]. Other hosts (a winit
//! loop, tests) can feed [`TouchFrame`] and [`WheelTick`] directly.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub identifier: i32,
    pub page_x: f64,
    pub page_y: f64,
}

impl TouchPoint {
    pub fn new(identifier: i32, page_x: f64, page_y: f64) -> Self {
        Self {
            identifier,
            page_x,
            page_y,
        }
    }

    pub fn distance_to(&self, other: &TouchPoint) -> f64 {
        let dx = self.page_x - other.page_x;
        let dy = self.page_y - other.page_y;
        (dx * dx + dy * dy).sqrt()
    }
}

pub trait TouchInput: Clone {
    /// Number of contacts currently on the surface.
    fn touch_count(&self) -> usize;
    /// Contact at `index`, in event order.
    fn touch(&self, index: usize) -> Option<TouchPoint>;
    fn prevent_default(&self);
}

pub trait WheelInput: Clone {
    fn delta_y(&self) -> f64;
    fn ctrl_key(&self) -> bool;
    fn meta_key(&self) -> bool {
        false
    }
    fn prevent_default(&self);
}

/// Distance between the first two contacts in event order.
///
/// Contacts are taken by position, not matched by identifier across events. If a
/// third finger lands or an earlier finger lifts mid-session, the pair may refer to
/// different fingers than at session start.
pub fn touch_distance<T: TouchInput>(event: &T) -> Option<f64> {
    let first = event.touch(0)?;
    let second = event.touch(1)?;
    Some(first.distance_to(&second))
}

/// A plain touch event. Clones share the prevented flag, like a DOM event does.
#[derive(Clone, Debug, Default)]
pub struct TouchFrame {
    pub touches: Vec<TouchPoint>,
    default_prevented: Rc<Cell<bool>>,
}

impl TouchFrame {
    pub fn new(touches: Vec<TouchPoint>) -> Self {
        Self {
            touches,
            default_prevented: Rc::default(),
        }
    }

    /// Two contacts with identifiers 0 and 1.
    pub fn pair(first: (f64, f64), second: (f64, f64)) -> Self {
        Self::new(vec![
            TouchPoint::new(0, first.0, first.1),
            TouchPoint::new(1, second.0, second.1),
        ])
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl TouchInput for TouchFrame {
    fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn touch(&self, index: usize) -> Option<TouchPoint> {
        self.touches.get(index).copied()
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

#[derive(Clone, Debug, Default)]
pub struct WheelTick {
    pub delta_y: f64,
    pub ctrl_key: bool,
    pub meta_key: bool,
    default_prevented: Rc<Cell<bool>>,
}

impl WheelTick {
    pub fn new(delta_y: f64) -> Self {
        Self {
            delta_y,
            ..Default::default()
        }
    }

    /// A ctrl-modified tick, which is how browsers report a trackpad pinch.
    pub fn pinch(delta_y: f64) -> Self {
        Self {
            delta_y,
            ctrl_key: true,
            ..Default::default()
        }
    }

    pub fn with_meta_key(mut self, meta_key: bool) -> Self {
        self.meta_key = meta_key;
        self
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl WheelInput for WheelTick {
    fn delta_y(&self) -> f64 {
        self.delta_y
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}
