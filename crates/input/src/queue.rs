use crate::action::Action;
use std::collections::VecDeque;

/// One input event already translated to the logical vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A bound key went down or up.
    Key { action: Action, pressed: bool },
    /// Raw pointer motion in pixels.
    PointerMotion { dx: f32, dy: f32 },
    /// Pointer capture was gained (`true`) or lost (`false`).
    Capture(bool),
}

/// Events collected between two frames.
///
/// Window callbacks push; the frame handler drains once before stepping the
/// navigator. Key and pointer events that arrive while capture is inactive
/// are dropped, so the camera only reacts while the pointer is grabbed.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
    captured: bool,
    dropped: u64,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether capture is active as of the last queued event.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Queue an event. Returns `false` when it was dropped.
    pub fn push(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Capture(captured) => {
                if captured == self.captured {
                    return false;
                }
                tracing::debug!(captured, "pointer capture changed");
                self.captured = captured;
            }
            InputEvent::Key { .. } | InputEvent::PointerMotion { .. } if !self.captured => {
                self.dropped += 1;
                tracing::trace!(?event, "dropped input while not captured");
                return false;
            }
            _ => {}
        }
        self.pending.push_back(event);
        true
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of events dropped so far because capture was inactive.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
