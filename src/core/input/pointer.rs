//=========================================================================
// Pointer Event Types
//
// Platform-neutral pointer input (mouse or primary touch).
//
// Responsibilities:
// - Carry position in logical screen pixels (top-left origin)
// - Carry a millisecond timestamp for tap-duration checks
// - Stay `Copy` so batches move across threads without allocation churn
//
// Event Flow:
// ```text
// Platform Layer (Winit mouse / touch)
//         ↓
//    PointerEvent (this module)
//         ↓
//    GestureTracker (idle / pressing / dragging)
//         ↓
//    PlayerCommand
// ```
//
//=========================================================================

//=== PointerEvent ========================================================

/// A single pointer transition.
///
/// `time_ms` is measured from an arbitrary platform epoch; only
/// differences between events are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse button down / finger touched).
    Down { x: f32, y: f32, time_ms: u64 },

    /// Pointer moved, pressed or not.
    Moved { x: f32, y: f32, time_ms: u64 },

    /// Pointer released (mouse button up / finger lifted or cancelled).
    Up { x: f32, y: f32, time_ms: u64 },
}

impl PointerEvent {
    /// Screen position carried by the event.
    pub fn position(&self) -> (f32, f32) {
        match *self {
            Self::Down { x, y, .. } | Self::Moved { x, y, .. } | Self::Up { x, y, .. } => (x, y),
        }
    }

    pub fn time_ms(&self) -> u64 {
        match *self {
            Self::Down { time_ms, .. } | Self::Moved { time_ms, .. } | Self::Up { time_ms, .. } => {
                time_ms
            }
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_every_variant() {
        let events = [
            PointerEvent::Down { x: 1.0, y: 2.0, time_ms: 3 },
            PointerEvent::Moved { x: 1.0, y: 2.0, time_ms: 3 },
            PointerEvent::Up { x: 1.0, y: 2.0, time_ms: 3 },
        ];

        for event in events {
            assert_eq!(event.position(), (1.0, 2.0));
            assert_eq!(event.time_ms(), 3);
        }
    }

    #[test]
    fn only_moved_is_move() {
        assert!(PointerEvent::Moved { x: 0.0, y: 0.0, time_ms: 0 }.is_move());
        assert!(!PointerEvent::Down { x: 0.0, y: 0.0, time_ms: 0 }.is_move());
    }
}
