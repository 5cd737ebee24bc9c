//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tori_jump::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Configuration
pub use crate::core::config::{
    ConfigError, GameConfig, InputConfig, ItemKind, LevelConfig, SessionConfig, Viewport,
};

// Host contract
pub use crate::core::host::WorldHost;

// Level
pub use crate::core::level::{BodyFlags, Item, ItemId, LevelEvent, LevelManager, Platform, PlatformId};

// Input
pub use crate::core::input::{GestureTracker, PlayerCommand, PointerEvent};

// Session
pub use crate::core::session::{
    Camera, FrameInput, GameSession, PlayerSnapshot, ScoreChanged, SessionEvent,
};

// Message bus
pub use crate::core::message_bus::MessageBus;
