//=========================================================================
// Level Events
//=========================================================================
//
// Lifecycle notifications emitted by the level manager.
//
// Hosts (physics, rendering) mirror the level through these: create a
// body/sprite on `*Spawned`, destroy it on `PlatformRecycled`,
// `ItemDiscarded` and `ItemCollected`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::item::ItemId;
use super::platform::{BodyFlags, PlatformId};

//=== LevelEvent ==========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum LevelEvent {
    /// A platform entered the level.
    PlatformSpawned {
        id: PlatformId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        velocity_x: f32,
        body: BodyFlags,
    },

    /// A platform scrolled out of the window and was destroyed.
    PlatformRecycled { id: PlatformId },

    /// An item was attached to a platform.
    ItemSpawned {
        id: ItemId,
        platform: PlatformId,
        kind: String,
    },

    /// An uncollected item was destroyed together with its platform.
    ItemDiscarded { id: ItemId },

    /// The player picked an item up.
    ItemCollected { id: ItemId, kind: String },
}
