// Callback counters shown in the stats panel
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    TrackpadPinch,
}

impl GestureKind {
    pub fn label(self) -> &'static str {
        match self {
            GestureKind::TouchStart => "Touch start",
            GestureKind::TouchMove => "Touch move",
            GestureKind::TouchEnd => "Touch end",
            GestureKind::TrackpadPinch => "Trackpad pinch",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureStats {
    pub touch_starts: u32,
    pub touch_moves: u32,
    pub touch_ends: u32,
    pub trackpad_pinches: u32,
    pub last: Option<GestureKind>,
}

#[derive(Clone, Copy, Debug)]
pub enum GestureAction {
    Seen(GestureKind),
    Reset,
}

impl Reducible for GestureStats {
    type Action = GestureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GestureAction::Seen(kind) => {
                let counter = match kind {
                    GestureKind::TouchStart => &mut new.touch_starts,
                    GestureKind::TouchMove => &mut new.touch_moves,
                    GestureKind::TouchEnd => &mut new.touch_ends,
                    GestureKind::TrackpadPinch => &mut new.trackpad_pinches,
                };
                *counter = counter.saturating_add(1);
                new.last = Some(kind);
            }
            GestureAction::Reset => new = GestureStats::default(),
        }
        Rc::new(new)
    }
}
