//! Pausing the hold phase while the pointer rests on a telegraph.

use std::cell::RefCell;
use std::rc::Weak;

use crate::telegraph::Timeline;

/// Pointer events a surface forwards to its [`HoverGate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the surface
    Enter,
    /// Pointer left the surface
    Leave,
    Move { x: f32, y: f32 },
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// Suspends a telegraph's hold phase while hovered.
///
/// Both handlers only act once the enter phase is done and while the hold
/// phase is not: hovering a telegraph that is still sliding in, or one that
/// is already leaving, changes nothing.
///
/// The gate holds a weak reference, so it is inert once its telegraph is gone.
#[derive(Clone)]
pub struct HoverGate {
    timeline: Weak<RefCell<Timeline>>,
}

impl HoverGate {
    pub(crate) fn new(timeline: Weak<RefCell<Timeline>>) -> Self {
        Self { timeline }
    }

    pub fn pointer_entered(&self) {
        self.with_timeline(Timeline::pointer_entered);
    }

    pub fn pointer_left(&self) {
        self.with_timeline(Timeline::pointer_left);
    }

    /// Route a raw pointer event; everything but enter/leave is ignored.
    pub fn handle(&self, event: &PointerEvent) -> EventResponse {
        match event {
            PointerEvent::Enter => {
                self.pointer_entered();
                EventResponse::Handled
            }
            PointerEvent::Leave => {
                self.pointer_left();
                EventResponse::Handled
            }
            PointerEvent::Move { .. } | PointerEvent::Down | PointerEvent::Up => {
                EventResponse::Ignored
            }
        }
    }

    /// Returns true while the telegraph this gate belongs to is alive
    pub fn is_attached(&self) -> bool {
        self.timeline.strong_count() > 0
    }

    fn with_timeline(&self, f: impl FnOnce(&mut Timeline)) {
        let Some(timeline) = self.timeline.upgrade() else {
            return;
        };
        match timeline.try_borrow_mut() {
            Ok(mut timeline) => f(&mut timeline),
            Err(_) => log::warn!("Hover event delivered while the telegraph was ticking, dropped"),
        };
    }
}

impl std::fmt::Debug for HoverGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverGate")
            .field("attached", &self.is_attached())
            .finish()
    }
}
