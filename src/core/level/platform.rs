//=========================================================================
// Platform Entity
//=========================================================================
//
// A moving horizontal platform and its optional collectible.
//
// The platform owns its item slot directly. Dropping or recycling the
// platform drops the item with it, so an item can never outlive its
// parent.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::item::Item;

//=== PlatformId ==========================================================

/// Stable identifier of a platform for the lifetime of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformId(pub(crate) u64);

impl PlatformId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

//=== BodyFlags ===========================================================

/// Physics body settings a host must apply when it materializes a
/// platform.
///
/// Platforms are kinematic: immovable on contact, unaffected by gravity,
/// and bounce elastically off the horizontal world bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFlags {
    pub immovable: bool,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    pub bounce_x: f32,
    pub bounce_y: f32,
}

impl BodyFlags {
    pub const KINEMATIC_BOUNCE: Self = Self {
        immovable: true,
        allow_gravity: false,
        collide_world_bounds: true,
        bounce_x: 1.0,
        bounce_y: 0.0,
    };
}

impl Default for BodyFlags {
    fn default() -> Self {
        Self::KINEMATIC_BOUNCE
    }
}

//=== Platform ============================================================

/// A live platform. Coordinates are world space, `y` grows downward;
/// `(x, y)` is the center of the platform.
#[derive(Debug, Clone)]
pub struct Platform {
    pub(super) id: PlatformId,
    pub(super) x: f32,
    pub(super) y: f32,
    pub(super) width: f32,
    pub(super) height: f32,
    pub(super) velocity_x: f32,
    pub(super) body: BodyFlags,
    pub(super) item: Option<Item>,
}

impl Platform {
    pub(super) fn new(
        id: PlatformId,
        position: (f32, f32),
        size: (f32, f32),
        velocity_x: f32,
    ) -> Self {
        Self {
            id,
            x: position.0,
            y: position.1,
            width: size.0,
            height: size.1,
            velocity_x,
            body: BodyFlags::KINEMATIC_BOUNCE,
            item: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> PlatformId {
        self.id
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn velocity_x(&self) -> f32 {
        self.velocity_x
    }

    pub fn body(&self) -> BodyFlags {
        self.body
    }

    /// Y of the walkable top surface.
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    //--- Motion -----------------------------------------------------------

    /// Moves horizontally by `velocity_x * dt`, reflecting off `[0, width]`.
    pub(super) fn integrate(&mut self, dt: f32, world_width: f32) {
        self.x += self.velocity_x * dt;

        if !self.body.collide_world_bounds {
            return;
        }

        let half = self.width / 2.0;
        if self.x - half < 0.0 {
            self.x = half;
            self.velocity_x = self.velocity_x.abs() * self.body.bounce_x;
        } else if self.x + half > world_width {
            self.x = world_width - half;
            self.velocity_x = -self.velocity_x.abs() * self.body.bounce_x;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
