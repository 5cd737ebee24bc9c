//=========================================================================
// Collectible Item
//=========================================================================
//
// A floating pickup pinned to the top surface of its parent platform.
//
// Items idle with a small yoyo float (sine ease-in-out). Collection
// flips `active` off; the owning platform slot is cleared by the
// level manager at the same time.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::PI;

//=== Internal Dependencies ===============================================

use super::platform::PlatformId;

//=== ItemId ==============================================================

/// Stable identifier of an item for the lifetime of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

//=== Item ================================================================

/// A collectible. `(x, y)` is the bottom-center anchor in world space.
#[derive(Debug, Clone)]
pub struct Item {
    pub(super) id: ItemId,
    pub(super) parent: PlatformId,
    pub(super) kind: String,
    pub(super) x: f32,
    pub(super) y: f32,
    pub(super) display_height: f32,
    pub(super) float_offset: f32,
    pub(super) spawned_at_ms: f64,
    pub(super) active: bool,
}

impl Item {
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Platform this item was attached to.
    pub fn parent(&self) -> PlatformId {
        self.parent
    }

    /// Category name drawn from the configured item set.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn display_height(&self) -> f32 {
        self.display_height
    }

    /// Current idle float distance above the platform top.
    pub fn float_offset(&self) -> f32 {
        self.float_offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Re-pins the anchor to a platform top, lifted by the float offset.
    pub(super) fn pin_to(&mut self, platform_x: f32, platform_top: f32) {
        self.x = platform_x;
        self.y = platform_top - self.float_offset;
    }
}

//=== Idle Float ==========================================================

/// Idle float offset after `elapsed_ms`.
///
/// Rises from 0 to `distance` over `duration_ms`, then back down, forever.
/// Both legs use a sine ease-in-out curve.
pub fn idle_offset(elapsed_ms: f32, distance: f32, duration_ms: f32) -> f32 {
    if duration_ms <= 0.0 || elapsed_ms <= 0.0 {
        return 0.0;
    }

    let cycle = elapsed_ms % (2.0 * duration_ms);
    let phase = if cycle < duration_ms {
        cycle / duration_ms
    } else {
        2.0 - cycle / duration_ms
    };

    distance * (1.0 - (PI * phase).cos()) / 2.0
}

//=========================================================================
// Unit Tests
//=========================================================================
