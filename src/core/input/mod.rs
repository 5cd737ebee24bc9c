//=========================================================================
// Input System
//
// Pointer input for the game core.
//
// Responsibilities:
// - Define the platform-neutral `PointerEvent`
// - Recognize taps and drags with an explicit state machine
// - Translate gestures into `PlayerCommand`s for the physics host
//
// Notes:
// The platform layer produces `PointerEvent`s; the game session owns
// the `GestureTracker` and feeds it once per event, in arrival order.
//
//=========================================================================

//=== Submodules ==========================================================

mod gesture;
mod pointer;

//=== Public API ==========================================================

pub use gesture::{GestureState, GestureTracker, PlayerCommand};
pub use pointer::PointerEvent;
