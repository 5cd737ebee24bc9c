//=========================================================================
// Gesture Tracker
//=========================================================================
//
// Pointer gesture state machine driving the player.
//
// Architecture:
//   PointerEvent → handle() → GestureState transition → PlayerCommand
//
// States:
// ```text
//            Down                    Moved |dx| > drag
//   Idle ───────────► Pressing ─────────────────────► Dragging
//    ▲                   │                               │
//    │   Up (tap → Launch)│                     Up       │
//    └───────────────────┴───────────────────────────────┘
// ```
//
// dx/dy are measured from the press origin, not from the last move.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::pointer::PointerEvent;
use crate::core::config::InputConfig;

//=== PlayerCommand =======================================================

/// Velocity changes requested of the player body.
///
/// Applied by the physics host; the core never integrates the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Set horizontal velocity (drag steering).
    SteerX { velocity_x: f32 },

    /// Set full velocity (tap jump).
    Launch { velocity_x: f32, velocity_y: f32 },

    /// Multiply horizontal velocity (released-pointer friction).
    DampX { factor: f32 },

    /// Shift horizontally with the platform being stood on.
    Carry { dx: f32 },
}

//=== GestureState ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Pressing { origin: (f32, f32), started_ms: u64 },
    Dragging { origin: (f32, f32), started_ms: u64 },
}

//=== GestureTracker ======================================================

/// Turns pointer transitions into player commands.
pub struct GestureTracker {
    config: InputConfig,
    state: GestureState,
}

impl GestureTracker {
    //--- Construction -----------------------------------------------------

    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
        }
    }

    //--- handle() ---------------------------------------------------------

    /// Feeds one pointer event. `player` is the player position in the
    /// same screen space as the pointer.
    pub fn handle(&mut self, event: &PointerEvent, player: (f32, f32)) -> Option<PlayerCommand> {
        let (x, y) = event.position();

        match (self.state, *event) {
            //--- Press ----------------------------------------------------
            (GestureState::Idle, PointerEvent::Down { time_ms, .. }) => {
                self.state = GestureState::Pressing { origin: (x, y), started_ms: time_ms };
                None
            }

            (_, PointerEvent::Down { time_ms, .. }) => {
                trace!(target: "input", "Press while {:?}, restarting gesture", self.state);
                self.state = GestureState::Pressing { origin: (x, y), started_ms: time_ms };
                None
            }

            //--- Move -----------------------------------------------------
            (GestureState::Pressing { origin, started_ms }, PointerEvent::Moved { .. })
            | (GestureState::Dragging { origin, started_ms }, PointerEvent::Moved { .. }) => {
                if (x - origin.0).abs() <= self.config.drag_threshold {
                    return None;
                }

                self.state = GestureState::Dragging { origin, started_ms };
                Some(self.steer(x, player))
            }

            (GestureState::Idle, PointerEvent::Moved { .. }) => None,

            //--- Release --------------------------------------------------
            (GestureState::Pressing { origin, started_ms }, PointerEvent::Up { time_ms, .. }) => {
                self.state = GestureState::Idle;

                let duration = time_ms.saturating_sub(started_ms);
                let is_tap = duration < self.config.tap_max_duration_ms
                    && (x - origin.0).abs() < self.config.tap_max_distance
                    && (y - origin.1).abs() < self.config.tap_max_distance;

                if is_tap {
                    Some(self.launch((x, y), player))
                } else {
                    trace!(target: "input", "Release after {}ms is not a tap", duration);
                    None
                }
            }

            (GestureState::Dragging { .. }, PointerEvent::Up { .. }) => {
                self.state = GestureState::Idle;
                None
            }

            (GestureState::Idle, PointerEvent::Up { .. }) => {
                trace!(target: "input", "Release without press ignored");
                None
            }
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` while a pointer is held (pressing or dragging).
    pub fn is_pointer_held(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    //--- Internal Helpers -------------------------------------------------

    fn steer(&self, pointer_x: f32, player: (f32, f32)) -> PlayerCommand {
        let speed = self.config.player_speed;
        let velocity_x = ((pointer_x - player.0) * self.config.drag_gain).clamp(-speed, speed);
        PlayerCommand::SteerX { velocity_x }
    }

    fn launch(&self, pointer: (f32, f32), player: (f32, f32)) -> PlayerCommand {
        let angle = (pointer.1 - player.1).atan2(pointer.0 - player.0);
        let speed = self.config.player_speed;

        PlayerCommand::Launch {
            velocity_x: angle.cos() * speed,
            velocity_y: (angle.sin() * speed).min(self.config.jump_velocity),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
