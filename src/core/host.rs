//=========================================================================
// World Host
//=========================================================================
//
// Contract for the physics/rendering collaborator.
//
// The core never simulates gravity, collisions or sprites. A host owns
// those and exchanges state with the session once per tick:
//
// ```text
//   host.step(dt)               advance bodies
//   host.player()               ─► PlayerSnapshot  ─┐
//   host.take_item_overlaps()   ─► Vec<ItemId>     ─┤
//                                                   ▼
//                                          GameSession::tick
//                                                   │
//   host.apply(&bus)            ◄── LevelEvent, PlayerCommand,
//                                   ScoreChanged, SessionEvent
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::level::ItemId;
use crate::core::message_bus::MessageBus;
use crate::core::session::PlayerSnapshot;

//=== WorldHost ===========================================================

/// Physics/rendering backend driven by the core thread.
///
/// Hosts must mirror platforms and items from `LevelEvent`s: create on
/// `PlatformSpawned` / `ItemSpawned`, destroy on `PlatformRecycled`,
/// `ItemDiscarded` and `ItemCollected`. Platform bodies must honor the
/// `BodyFlags` carried by `PlatformSpawned`.
pub trait WorldHost: Send + 'static {
    /// Advances the host simulation by `dt` seconds.
    fn step(&mut self, dt: f32);

    /// Current player state in world coordinates.
    fn player(&self) -> PlayerSnapshot;

    /// Items the player overlapped since the last call.
    fn take_item_overlaps(&mut self) -> Vec<ItemId>;

    /// Consumes this tick's messages.
    fn apply(&mut self, bus: &MessageBus);
}
