//! Input unifier: collapses mouse and touch events into one pointer stream.
//!
//! The platform layer turns each DOM event into a [`RawInput`]; [`normalize`]
//! maps it onto the three semantic events the engine understands. Nothing in
//! here holds state beyond the [`Subscriptions`] ledger the platform layer
//! keeps for its listeners.

use glam::Vec2;
use smallvec::SmallVec;

/// Window-level events the cursor subscribes to.
pub const WINDOW_EVENTS: [&str; 7] = [
    "mousemove",
    "touchmove",
    "mousedown",
    "touchstart",
    "mouseup",
    "touchend",
    "mouseover",
];

/// Tags that count as interactive when hovered, directly or via an ancestor.
pub const ACTIONABLE_TAGS: [&str; 2] = ["A", "BUTTON"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
    pub kind: PointerKind,
}

impl PointerSample {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Platform event as delivered, before normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput<'a> {
    MouseMove { x: f32, y: f32 },
    /// Active touch points in platform order; the first one drives the cursor.
    TouchMove { touches: &'a [Vec2] },
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
    /// Hover sample; `actionable` comes from [`is_actionable`] on the event target.
    Over { actionable: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(PointerSample),
    Press { down: bool },
    Hover { actionable: bool },
}

pub fn normalize(raw: &RawInput<'_>, now_ms: u64) -> Option<PointerEvent> {
    let ev = match *raw {
        RawInput::MouseMove { x, y } => PointerEvent::Move(PointerSample {
            x,
            y,
            timestamp_ms: now_ms,
            kind: PointerKind::Mouse,
        }),
        RawInput::TouchMove { touches } => {
            // a touchmove with no active touches carries no position
            let primary = touches.first()?;
            PointerEvent::Move(PointerSample {
                x: primary.x,
                y: primary.y,
                timestamp_ms: now_ms,
                kind: PointerKind::Touch,
            })
        }
        RawInput::MouseDown | RawInput::TouchStart => PointerEvent::Press { down: true },
        RawInput::MouseUp | RawInput::TouchEnd => PointerEvent::Press { down: false },
        RawInput::Over { actionable } => PointerEvent::Hover { actionable },
    };
    Some(ev)
}

/// Minimal view of a UI tree node, enough to decide whether it is interactive.
pub trait HoverTarget: Sized {
    fn tag_name(&self) -> String;
    fn parent(&self) -> Option<Self>;
}

#[inline]
pub fn is_actionable_tag(tag: &str) -> bool {
    ACTIONABLE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// True when the target, or any ancestor, is a link or button.
/// A missing target is never actionable.
pub fn is_actionable<T: HoverTarget>(target: Option<&T>) -> bool {
    let Some(target) = target else {
        return false;
    };
    if is_actionable_tag(&target.tag_name()) {
        return true;
    }
    let mut cursor = target.parent();
    while let Some(node) = cursor {
        if is_actionable_tag(&node.tag_name()) {
            return true;
        }
        cursor = node.parent();
    }
    false
}

/// Listener ledger keyed by event name.
///
/// `attach` refuses a second handle for the same event so a re-activation
/// can never double-deliver; `detach_all` hands every handle back for removal
/// and leaves the ledger empty, so calling it twice is harmless.
pub struct Subscriptions<H> {
    entries: SmallVec<[(&'static str, H); 8]>,
}

impl<H> Default for Subscriptions<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Subscriptions<H> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub fn attach(&mut self, event: &'static str, handle: H) -> bool {
        if self.is_attached(event) {
            log::warn!("[input] duplicate subscription to '{}' ignored", event);
            return false;
        }
        self.entries.push((event, handle));
        true
    }

    pub fn is_attached(&self, event: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn detach_all(&mut self) -> impl Iterator<Item = (&'static str, H)> + '_ {
        self.entries.drain(..)
    }
}
