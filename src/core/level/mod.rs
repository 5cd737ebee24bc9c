//=========================================================================
// Level System
//=========================================================================
//
// Endless vertical level: a bounded set of live platforms, recycled as
// they leave the window and respawned above the frontier.
//
// Architecture:
//   LevelManager
//     ├─ platforms: Vec<Platform>
//     │     └─ item: Option<Item>   (owned; dies with the platform)
//     ├─ frontier: f32              (y of the highest platform)
//     └─ events: Vec<LevelEvent>    (drained by the session each tick)
//
//=========================================================================

//=== Module Declarations =================================================

mod event;
mod item;
mod manager;
mod platform;

//=== Public API ==========================================================

pub use event::LevelEvent;
pub use item::{idle_offset, Item, ItemId};
pub use manager::LevelManager;
pub use platform::{BodyFlags, Platform, PlatformId};
