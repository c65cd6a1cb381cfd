//! The shared scale value and its change notification.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Subscriber = Rc<dyn Fn(f64)>;

struct ScaleInner {
    value: Cell<f64>,
    next_id: Cell<usize>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
}

/// A cloneable handle to one scale value. Clones share the value and the
/// subscriber list.
#[derive(Clone)]
pub struct ScaleCell {
    inner: Rc<ScaleInner>,
}

impl ScaleCell {
    pub fn new(initial: f64) -> Self {
        Self {
            inner: Rc::new(ScaleInner {
                value: Cell::new(initial),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> f64 {
        self.inner.value.get()
    }

    /// Stores `value` and notifies subscribers if it differs from the current one.
    pub fn set(&self, value: f64) {
        let old = self.inner.value.replace(value);
        if old.to_bits() == value.to_bits() {
            return;
        }
        // Snapshot so subscribers can subscribe, unsubscribe or write back.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in subscribers {
            f(value);
        }
    }

    pub fn update(&self, f: impl FnOnce(f64) -> f64) {
        self.set(f(self.get()));
    }

    /// Registers `f` to run after every change. The returned guard unsubscribes
    /// when dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(f64) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
        Subscription {
            cell: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn ptr_eq(&self, other: &ScaleCell) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ScaleCell {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PartialEq for ScaleCell {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ScaleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleCell")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

pub struct Subscription {
    cell: Weak<ScaleInner>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.cell.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
