//=========================================================================
// Input Buffer
//
// Collects pointer events between frame boundaries.
//
// Responsibilities:
// - Preserve Down/Up ordering exactly (gestures depend on it)
// - Coalesce runs of hover moves to the latest position
// - Drop identical consecutive events
// - Hand the frame's events to the platform via `drain()`
//
// Notes:
// Moves are only coalesced while no pointer is held. Between a Down and
// its Up every move is kept, since an intermediate move can be the one
// that turns a press into a drag. Held state survives `drain()` because
// a press can span frames.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::PointerEvent;

//=== InputBuffer Struct ==================================================

pub(crate) struct InputBuffer {
    events: Vec<PointerEvent>,
    held: bool,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
            held: false,
        }
    }

    //--- push() -----------------------------------------------------------
    pub(crate) fn push(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { .. } => self.held = true,
            PointerEvent::Up { .. } => self.held = false,
            PointerEvent::Moved { .. } => {}
        }

        match self.events.last_mut() {
            Some(last) if *last == event => {}
            Some(last) if !self.held && last.is_move() && event.is_move() => *last = event,
            _ => self.events.push(event),
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns None for an empty frame so nothing is sent.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<PointerEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
