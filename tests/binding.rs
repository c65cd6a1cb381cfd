use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pinch_scale::{
    EventSource, ListenerHandle, ListenerOptions, PinchConfig, PinchError, PinchEventKind,
    PinchScaleOptions, PreventDefault, ScaleCell, TouchFrame, WheelTick, bind_pinch_scale,
    bind_pinch_scale_to,
};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Surface {
    Window,
    Element(u32),
}

type TouchListener = (usize, Surface, PinchEventKind, Rc<dyn Fn(&TouchFrame)>);
type WheelListener = (usize, Surface, Rc<dyn Fn(&WheelTick)>);

/// In-memory event source. Events dispatched on an element bubble to the window.
#[derive(Default)]
struct FakeSource {
    next_id: Cell<usize>,
    registrations: RefCell<Vec<(Surface, PinchEventKind, ListenerOptions)>>,
    touch: Rc<RefCell<Vec<TouchListener>>>,
    wheel: Rc<RefCell<Vec<WheelListener>>>,
    refuse: Option<PinchEventKind>,
}

impl FakeSource {
    fn refusing(kind: PinchEventKind) -> Self {
        Self {
            refuse: Some(kind),
            ..Default::default()
        }
    }

    fn id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn reaches(listener: Surface, dispatched: Surface) -> bool {
        listener == dispatched || listener == Surface::Window
    }

    fn dispatch_touch(&self, on: Surface, kind: PinchEventKind, event: &TouchFrame) {
        let handlers: Vec<_> = self
            .touch
            .borrow()
            .iter()
            .filter(|(_, target, k, _)| *k == kind && Self::reaches(*target, on))
            .map(|(_, _, _, h)| h.clone())
            .collect();
        for h in handlers {
            h(event);
        }
    }

    fn dispatch_wheel(&self, on: Surface, event: &WheelTick) {
        let handlers: Vec<_> = self
            .wheel
            .borrow()
            .iter()
            .filter(|(_, target, _)| Self::reaches(*target, on))
            .map(|(_, _, h)| h.clone())
            .collect();
        for h in handlers {
            h(event);
        }
    }

    fn listener_count(&self) -> usize {
        self.touch.borrow().len() + self.wheel.borrow().len()
    }

    fn registration(&self, kind: PinchEventKind) -> Option<(Surface, ListenerOptions)> {
        self.registrations
            .borrow()
            .iter()
            .find(|(_, k, _)| *k == kind)
            .map(|(target, _, options)| (*target, *options))
    }
}

impl EventSource for FakeSource {
    type Target = Surface;
    type Touch = TouchFrame;
    type Wheel = WheelTick;

    fn global_surface(&self) -> Surface {
        Surface::Window
    }

    fn listen_touch(
        &self,
        target: &Surface,
        kind: PinchEventKind,
        options: ListenerOptions,
        handler: Box<dyn Fn(&TouchFrame)>,
    ) -> Result<ListenerHandle, PinchError> {
        if self.refuse == Some(kind) {
            return Err(PinchError::Listen {
                event: kind.event_name(),
                reason: "refused".into(),
            });
        }
        let id = self.id();
        self.registrations.borrow_mut().push((*target, kind, options));
        self.touch
            .borrow_mut()
            .push((id, *target, kind, Rc::from(handler)));
        let list = Rc::downgrade(&self.touch);
        Ok(ListenerHandle::new(move || {
            if let Some(list) = list.upgrade() {
                list.borrow_mut().retain(|(i, ..)| *i != id);
            }
        }))
    }

    fn listen_wheel(
        &self,
        target: &Surface,
        options: ListenerOptions,
        handler: Box<dyn Fn(&WheelTick)>,
    ) -> Result<ListenerHandle, PinchError> {
        if self.refuse == Some(PinchEventKind::Wheel) {
            return Err(PinchError::Listen {
                event: "wheel",
                reason: "refused".into(),
            });
        }
        let id = self.id();
        self.registrations
            .borrow_mut()
            .push((*target, PinchEventKind::Wheel, options));
        self.wheel.borrow_mut().push((id, *target, Rc::from(handler)));
        let list = Rc::downgrade(&self.wheel);
        Ok(ListenerHandle::new(move || {
            if let Some(list) = list.upgrade() {
                list.borrow_mut().retain(|(i, ..)| *i != id);
            }
        }))
    }
}

const TARGET: Surface = Surface::Element(1);

const START: ((f64, f64), (f64, f64)) = ((3.0, 0.0), (6.0, 0.0));
const SMALL: ((f64, f64), (f64, f64)) = ((4.0, 0.0), (5.0, 0.0));
const BIG: ((f64, f64), (f64, f64)) = ((2.0, 0.0), (7.0, 0.0));

fn frame(pos: ((f64, f64), (f64, f64))) -> TouchFrame {
    TouchFrame::pair(pos.0, pos.1)
}

#[derive(Default)]
struct Counts {
    start: Rc<Cell<u32>>,
    moves: Rc<Cell<u32>>,
    end: Rc<Cell<u32>>,
    wheel: Rc<Cell<u32>>,
}

fn count<T: 'static>(hits: &Rc<Cell<u32>>) -> Option<Callback<T>> {
    let hits = hits.clone();
    Some(Callback::from(move |_: T| hits.set(hits.get() + 1)))
}

fn options(counts: &Counts) -> PinchScaleOptions<FakeSource> {
    PinchScaleOptions {
        target: Some(TARGET),
        on_touch_start: count(&counts.start),
        on_touch_move: count(&counts.moves),
        on_touch_end: count(&counts.end),
        on_trackpad_pinch: count(&counts.wheel),
        ..Default::default()
    }
}

/// First position starts on the target, the last ends on the window, the rest
/// move on the window.
fn pinch(source: &FakeSource, positions: &[((f64, f64), (f64, f64))]) {
    let last = positions.len() - 1;
    for (i, pos) in positions.iter().enumerate() {
        if i == 0 {
            source.dispatch_touch(TARGET, PinchEventKind::TouchStart, &frame(*pos));
        } else if i == last {
            source.dispatch_touch(Surface::Window, PinchEventKind::TouchEnd, &frame(*pos));
        } else {
            source.dispatch_touch(Surface::Window, PinchEventKind::TouchMove, &frame(*pos));
        }
    }
}

#[test]
fn registers_each_event_on_its_surface() {
    let source = FakeSource::default();
    let bound = bind_pinch_scale(Some(&source), options(&Counts::default()));
    assert_eq!(bound.listener_count(), 4);
    assert!(bound.is_bound());

    let active = ListenerOptions {
        passive: false,
        capture: false,
    };
    assert_eq!(
        source.registration(PinchEventKind::TouchStart),
        Some((TARGET, active))
    );
    assert_eq!(
        source.registration(PinchEventKind::TouchMove),
        Some((Surface::Window, active))
    );
    assert_eq!(
        source.registration(PinchEventKind::TouchEnd),
        Some((Surface::Window, active))
    );
    assert_eq!(
        source.registration(PinchEventKind::Wheel),
        Some((TARGET, active))
    );
}

#[test]
fn listeners_are_passive_without_prevent_default() {
    let source = FakeSource::default();
    let config = PinchConfig {
        capture: true,
        ..Default::default()
    };
    let _bound = bind_pinch_scale(
        Some(&source),
        options(&Counts::default())
            .with_prevent_default(false)
            .with_config(config),
    );
    let (_, opts) = source.registration(PinchEventKind::Wheel).unwrap();
    assert_eq!(
        opts,
        ListenerOptions {
            passive: true,
            capture: true
        }
    );
}

#[test]
fn missing_target_falls_back_to_global_surface() {
    let source = FakeSource::default();
    let _bound = bind_pinch_scale(Some(&source), PinchScaleOptions::default());
    assert_eq!(
        source.registration(PinchEventKind::TouchStart).map(|r| r.0),
        Some(Surface::Window)
    );
    assert_eq!(
        source.registration(PinchEventKind::Wheel).map(|r| r.0),
        Some(Surface::Window)
    );
}

#[test]
fn pinch_out_on_touch_device() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));
    let start = bound.get();
    pinch(&source, &[START, BIG, BIG]);
    assert!(bound.get() > start);
    assert_eq!(bound.get(), 5.0 / 3.0);
    assert_eq!(
        (counts.start.get(), counts.moves.get(), counts.end.get()),
        (1, 1, 1)
    );
}

#[test]
fn pinch_in_on_touch_device() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));
    pinch(&source, &[START, SMALL, SMALL]);
    assert!(bound.get() < 1.0);
    assert_eq!(
        (counts.start.get(), counts.moves.get(), counts.end.get()),
        (1, 1, 1)
    );
}

#[test]
fn pinch_in_and_out_on_touch_device() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));
    pinch(&source, &[START, SMALL, START, START]);
    assert_eq!(bound.get(), 1.0);
    assert_eq!(counts.moves.get(), 2);
    assert_eq!(counts.end.get(), 1);
}

#[test]
fn touch_start_elsewhere_is_not_a_pinch() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));
    source.dispatch_touch(Surface::Element(2), PinchEventKind::TouchStart, &frame(START));
    source.dispatch_touch(Surface::Window, PinchEventKind::TouchMove, &frame(BIG));
    source.dispatch_touch(Surface::Window, PinchEventKind::TouchEnd, &frame(BIG));
    assert_eq!(bound.get(), 1.0);
    assert_eq!(
        (counts.start.get(), counts.moves.get(), counts.end.get()),
        (0, 0, 0)
    );
}

#[test]
fn single_finger_does_nothing() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));
    let one = TouchFrame::new(vec![pinch_scale::TouchPoint::new(0, 1.0, 1.0)]);
    source.dispatch_touch(TARGET, PinchEventKind::TouchStart, &one);
    source.dispatch_touch(Surface::Window, PinchEventKind::TouchMove, &frame(BIG));
    assert!(!one.default_prevented());
    assert_eq!(bound.get(), 1.0);
    assert_eq!(counts.start.get(), 0);
}

#[test]
fn trackpad_pinch_out_and_in() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));

    source.dispatch_wheel(TARGET, &WheelTick::pinch(-10.0));
    assert_eq!(bound.get(), 1.1);
    source.dispatch_wheel(TARGET, &WheelTick::pinch(10.0));
    assert_eq!(bound.get(), 1.0);
    source.dispatch_wheel(TARGET, &WheelTick::pinch(10.0));
    assert!(bound.get() < 1.0);
    assert_eq!(counts.wheel.get(), 3);
}

#[test]
fn plain_scroll_is_not_a_pinch() {
    let source = FakeSource::default();
    let counts = Counts::default();
    let bound = bind_pinch_scale(Some(&source), options(&counts));
    let tick = WheelTick::new(-25.0);
    source.dispatch_wheel(TARGET, &tick);
    assert_eq!(bound.get(), 1.0);
    assert_eq!(counts.wheel.get(), 0);
    assert!(!tick.default_prevented());
}

#[test]
fn touch_and_trackpad_compose_on_one_scale() {
    let source = FakeSource::default();
    let bound = bind_pinch_scale(Some(&source), options(&Counts::default()));
    source.dispatch_wheel(TARGET, &WheelTick::pinch(-10.0));
    pinch(&source, &[START, BIG, BIG]);
    assert_eq!(bound.get(), 1.1 * (5.0 / 3.0));
}

#[test]
fn dropping_the_binding_detaches_listeners() {
    let source = FakeSource::default();
    let bound = bind_pinch_scale(Some(&source), options(&Counts::default()));
    let scale = bound.scale().clone();
    assert_eq!(source.listener_count(), 4);
    drop(bound);
    assert_eq!(source.listener_count(), 0);
    source.dispatch_wheel(TARGET, &WheelTick::pinch(-10.0));
    assert_eq!(scale.get(), 1.0);
}

#[test]
fn detach_keeps_the_last_value() {
    let source = FakeSource::default();
    let bound = bind_pinch_scale(Some(&source), options(&Counts::default()));
    source.dispatch_wheel(TARGET, &WheelTick::pinch(-10.0));
    let scale = bound.detach();
    assert_eq!(source.listener_count(), 0);
    assert_eq!(scale.get(), 1.1);
}

#[test]
fn no_source_gives_an_inert_scale() {
    let bound = bind_pinch_scale::<FakeSource>(None, PinchScaleOptions::default());
    assert_eq!(bound.get(), 1.0);
    assert!(!bound.is_bound());
    assert_eq!(bound.listener_count(), 0);
}

#[test]
fn refused_listener_is_skipped() {
    let source = FakeSource::refusing(PinchEventKind::Wheel);
    let bound = bind_pinch_scale(Some(&source), options(&Counts::default()));
    assert_eq!(bound.listener_count(), 3);
    pinch(&source, &[START, BIG, BIG]);
    assert_eq!(bound.get(), 5.0 / 3.0);
}

#[test]
fn prevent_default_can_be_toggled_while_bound() {
    let source = FakeSource::default();
    let (prevent, flag) = PreventDefault::shared(true);
    let _bound = bind_pinch_scale(Some(&source), options(&Counts::default()).with_prevent_default(prevent));

    let first = WheelTick::pinch(-1.0);
    source.dispatch_wheel(TARGET, &first);
    assert!(first.default_prevented());

    flag.set(false);
    let second = WheelTick::pinch(-1.0);
    source.dispatch_wheel(TARGET, &second);
    assert!(!second.default_prevented());
}

#[test]
fn binds_onto_an_existing_cell() {
    let source = FakeSource::default();
    let scale = ScaleCell::new(2.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let seen = seen.clone();
        scale.subscribe(move |v| seen.borrow_mut().push(v))
    };
    let bound = bind_pinch_scale_to(&source, scale.clone(), options(&Counts::default()));
    assert!(bound.scale().ptr_eq(&scale));
    pinch(&source, &[START, BIG, BIG]);
    assert_eq!(*seen.borrow(), vec![2.0 * (5.0 / 3.0)]);
}

#[test]
fn lost_touch_end_is_recovered_when_enabled() {
    let source = FakeSource::default();
    let config = PinchConfig {
        end_on_contact_loss: true,
        ..Default::default()
    };
    let bound = bind_pinch_scale(Some(&source), options(&Counts::default()).with_config(config));
    source.dispatch_touch(TARGET, PinchEventKind::TouchStart, &frame(START));
    let lone = TouchFrame::new(vec![pinch_scale::TouchPoint::new(0, 3.0, 0.0)]);
    source.dispatch_touch(Surface::Window, PinchEventKind::TouchMove, &lone);
    source.dispatch_touch(Surface::Window, PinchEventKind::TouchMove, &frame(BIG));
    assert_eq!(bound.get(), 1.0);
}

#[test]
fn invalid_config_binds_with_defaults() {
    let source = FakeSource::default();
    let config = PinchConfig {
        min_factor: 2.0,
        max_factor: 1.0,
        wheel_delta_divisor: 0.0,
        ..Default::default()
    };
    let bound = bind_pinch_scale(
        Some(&source),
        options(&Counts::default()).with_config(config),
    );
    assert_eq!(bound.listener_count(), 4);

    source.dispatch_wheel(TARGET, &WheelTick::pinch(-10.0));
    assert_eq!(bound.get(), 1.1);
    source.dispatch_wheel(TARGET, &WheelTick::pinch(0.0));
    assert_eq!(bound.get(), 1.1);
}
