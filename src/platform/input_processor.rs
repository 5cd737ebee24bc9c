//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit mouse and touch events into engine PointerEvents.
//
// Architecture:
//   Winit Events → InputProcessor → PointerEvent (engine type) → InputBuffer
//
// Stateful tracking: caches the cursor position (button events carry
// none), the window scale factor (Winit reports physical pixels) and the
// primary touch id. Secondary fingers and non-left buttons are filtered
// (returns None).
//
//=========================================================================

//=== Standard Library ====================================================

use std::time::Instant;

//=== External Dependencies ===============================================

use winit::event::{ElementState, MouseButton, TouchPhase};

//=== Internal Dependencies ===============================================

use crate::core::input::PointerEvent;

//=== InputProcessor ======================================================

/// Converts Winit pointer input to logical-pixel PointerEvents.
pub(crate) struct InputProcessor {
    origin: Instant,
    scale_factor: f64,
    cursor: (f32, f32),
    primary_touch: Option<u64>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
            scale_factor: 1.0,
            cursor: (0.0, 0.0),
            primary_touch: None,
        }
    }

    //--- State Management -------------------------------------------------

    pub(crate) fn update_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub(crate) fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a physical cursor position to a Moved event.
    pub(crate) fn process_cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        let time_ms = self.now_ms();
        self.cursor_moved_at(x, y, time_ms)
    }

    /// Converts a mouse button transition (left button only).
    pub(crate) fn process_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerEvent> {
        self.mouse_button_at(button, state, self.now_ms())
    }

    /// Converts a touch transition (primary finger only).
    pub(crate) fn process_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f64,
        y: f64,
    ) -> Option<PointerEvent> {
        let time_ms = self.now_ms();
        self.touch_at(id, phase, x, y, time_ms)
    }

    //--- Internal Helpers -------------------------------------------------

    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn to_logical(&self, x: f64, y: f64) -> (f32, f32) {
        ((x / self.scale_factor) as f32, (y / self.scale_factor) as f32)
    }

    fn cursor_moved_at(&mut self, x: f64, y: f64, time_ms: u64) -> PointerEvent {
        let (x, y) = self.to_logical(x, y);
        self.cursor = (x, y);
        PointerEvent::Moved { x, y, time_ms }
    }

    fn mouse_button_at(
        &self,
        button: MouseButton,
        state: ElementState,
        time_ms: u64,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        let (x, y) = self.cursor;
        Some(match state {
            ElementState::Pressed => PointerEvent::Down { x, y, time_ms },
            ElementState::Released => PointerEvent::Up { x, y, time_ms },
        })
    }

    fn touch_at(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f64,
        y: f64,
        time_ms: u64,
    ) -> Option<PointerEvent> {
        let (x, y) = self.to_logical(x, y);

        match phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return None;
                }
                self.primary_touch = Some(id);
                Some(PointerEvent::Down { x, y, time_ms })
            }
            TouchPhase::Moved => {
                (self.primary_touch == Some(id)).then_some(PointerEvent::Moved { x, y, time_ms })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.primary_touch != Some(id) {
                    return None;
                }
                self.primary_touch = None;
                Some(PointerEvent::Up { x, y, time_ms })
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_move_is_converted_to_logical_pixels() {
        let mut processor = InputProcessor::new();
        processor.update_scale_factor(2.0);

        let event = processor.cursor_moved_at(200.0, 100.0, 7);

        assert_eq!(event, PointerEvent::Moved { x: 100.0, y: 50.0, time_ms: 7 });
        assert_eq!(processor.cursor(), (100.0, 50.0));
    }

    #[test]
    fn non_positive_scale_factor_is_ignored() {
        let mut processor = InputProcessor::new();
        processor.update_scale_factor(0.0);

        let event = processor.cursor_moved_at(10.0, 20.0, 0);
        assert_eq!(event.position(), (10.0, 20.0));
    }

    #[test]
    fn left_button_uses_cached_cursor() {
        let mut processor = InputProcessor::new();
        processor.cursor_moved_at(30.0, 40.0, 1);

        assert_eq!(
            processor.mouse_button_at(MouseButton::Left, ElementState::Pressed, 2),
            Some(PointerEvent::Down { x: 30.0, y: 40.0, time_ms: 2 })
        );
        assert_eq!(
            processor.mouse_button_at(MouseButton::Left, ElementState::Released, 3),
            Some(PointerEvent::Up { x: 30.0, y: 40.0, time_ms: 3 })
        );
    }

    #[test]
    fn other_buttons_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.mouse_button_at(MouseButton::Right, ElementState::Pressed, 0),
            None
        );
        assert_eq!(
            processor.mouse_button_at(MouseButton::Middle, ElementState::Released, 0),
            None
        );
    }

    #[test]
    fn primary_touch_produces_full_sequence() {
        let mut processor = InputProcessor::new();

        assert!(matches!(
            processor.touch_at(1, TouchPhase::Started, 5.0, 5.0, 0),
            Some(PointerEvent::Down { .. })
        ));
        assert!(matches!(
            processor.touch_at(1, TouchPhase::Moved, 8.0, 5.0, 1),
            Some(PointerEvent::Moved { .. })
        ));
        assert!(matches!(
            processor.touch_at(1, TouchPhase::Ended, 8.0, 5.0, 2),
            Some(PointerEvent::Up { .. })
        ));
    }

    #[test]
    fn secondary_touch_is_ignored() {
        let mut processor = InputProcessor::new();
        processor.touch_at(1, TouchPhase::Started, 0.0, 0.0, 0);

        assert_eq!(processor.touch_at(2, TouchPhase::Started, 9.0, 9.0, 1), None);
        assert_eq!(processor.touch_at(2, TouchPhase::Moved, 9.0, 9.0, 2), None);
        assert_eq!(processor.touch_at(2, TouchPhase::Ended, 9.0, 9.0, 3), None);
    }

    #[test]
    fn cancelled_touch_releases_primary() {
        let mut processor = InputProcessor::new();
        processor.touch_at(1, TouchPhase::Started, 0.0, 0.0, 0);

        assert!(matches!(
            processor.touch_at(1, TouchPhase::Cancelled, 0.0, 0.0, 1),
            Some(PointerEvent::Up { .. })
        ));
        assert!(matches!(
            processor.touch_at(2, TouchPhase::Started, 0.0, 0.0, 2),
            Some(PointerEvent::Down { .. })
        ));
    }
}
