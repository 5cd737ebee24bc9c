//=========================================================================
// Game Session
//=========================================================================
//
// Explicit game state for one run of the endless jumper.
//
// Architecture:
//   GameSession
//     ├─ level:    LevelManager    (platforms, items, frontier)
//     ├─ camera:   Camera          (scroll over a static world)
//     ├─ gestures: GestureTracker  (pointer → PlayerCommand)
//     └─ score / restarts
//
// Tick pipeline:
//   1. pointer events → gestures → PlayerCommand (+ DampX when released)
//   2. level.advance(dt), Carry for the platform under the player
//   3. reported overlaps → collect → score
//   4. fall check → restart, or camera follow → level.step(frontier)
//   5. level events drained onto the bus
//
// The session never touches the player body. It reads a snapshot from
// the host and answers with commands on the bus.
//
//=========================================================================

//=== Submodules ==========================================================

mod camera;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::config::{ConfigError, GameConfig};
use crate::core::input::{GestureTracker, PlayerCommand, PointerEvent};
use crate::core::level::{ItemId, LevelManager, PlatformId};
use crate::core::message_bus::MessageBus;

//=== Public API ==========================================================

pub use camera::Camera;

//=== Frame Data ==========================================================

/// Player state as last reported by the physics host (world space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,

    /// Platform the player is resting on, if any.
    pub standing_on: Option<PlatformId>,
}

/// Everything the session consumes for one tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// Seconds since the previous tick.
    pub dt: f32,
    pub player: PlayerSnapshot,
    pub pointer_events: &'a [PointerEvent],

    /// Items the player overlapped since the previous tick. Duplicates
    /// are allowed.
    pub item_overlaps: &'a [ItemId],
}

//=== Outgoing Messages ===================================================

/// Score after a change, for the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// The camera climbed; `scroll_y` is the world y at the screen top.
    CameraScrolled { scroll_y: f32 },

    /// The player fell out of the window and the run restarted. The host
    /// must move the player to the given spawn point.
    Restarted { player_x: f32, player_y: f32 },
}

//=== GameSession =========================================================

pub struct GameSession {
    config: GameConfig,
    level: LevelManager,
    camera: Camera,
    gestures: GestureTracker,
    frontier: f32,
    score: u32,
    restarts: u32,
}

impl GameSession {
    //--- Construction -----------------------------------------------------

    /// Validates `config` and builds the opening level.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let level = LevelManager::new(config.level.clone(), config.viewport)?;
        Ok(Self::from_parts(config, level))
    }

    /// Like [`GameSession::new`] with a deterministic level sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let level = LevelManager::with_seed(config.level.clone(), config.viewport, seed)?;
        Ok(Self::from_parts(config, level))
    }

    fn from_parts(config: GameConfig, level: LevelManager) -> Self {
        let mut session = Self {
            gestures: GestureTracker::new(config.input.clone()),
            camera: Camera::new(),
            frontier: config.viewport.height,
            score: 0,
            restarts: 0,
            level,
            config,
        };
        session.start();
        session
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one simulation tick and publishes its results on `bus`.
    pub fn tick(&mut self, frame: &FrameInput<'_>, bus: &mut MessageBus) {
        let player = frame.player;

        //--- 1. Gestures ------------------------------------------------
        let player_screen = self.camera.to_screen((player.x, player.y));
        for event in frame.pointer_events {
            if let Some(command) = self.gestures.handle(event, player_screen) {
                debug!(target: "session", "Gesture command: {:?}", command);
                bus.push(command);
            }
        }

        if !self.gestures.is_pointer_held() {
            bus.push(PlayerCommand::DampX {
                factor: self.config.input.release_damping,
            });
        }

        //--- 2. Platform motion -----------------------------------------
        self.level.advance(frame.dt);

        if let Some(platform) = player.standing_on.and_then(|id| self.level.platform(id)) {
            bus.push(PlayerCommand::Carry {
                dx: platform.velocity_x() * frame.dt,
            });
        }

        //--- 3. Collection ----------------------------------------------
        let mut collected = 0;
        for &id in frame.item_overlaps {
            if self.level.collect(id).is_some() {
                collected += 1;
            }
        }

        if collected > 0 {
            self.score += collected;
            bus.push(ScoreChanged { score: self.score });
        }

        //--- 4. Fall check / scroll -------------------------------------
        if player.y > self.camera.scroll_y() + self.config.viewport.height {
            self.restart(bus);
        } else {
            if self.camera.follow(player.y, self.config.session.scroll_threshold) {
                bus.push(SessionEvent::CameraScrolled {
                    scroll_y: self.camera.scroll_y(),
                });
            }
            self.frontier = self.level.step(self.frontier, self.camera.scroll_y());
        }

        //--- 5. Publish level changes -----------------------------------
        bus.extend(self.level.drain_events());
    }

    //--- Query API --------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frontier(&self) -> f32 {
        self.frontier
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn level(&self) -> &LevelManager {
        &self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Where the player (re)spawns, in world space.
    pub fn spawn_point(&self) -> (f32, f32) {
        let viewport = self.config.viewport;
        (
            viewport.width / 2.0,
            viewport.height - self.config.session.player_spawn_offset,
        )
    }

    //--- Internal Helpers -------------------------------------------------

    fn start(&mut self) {
        self.camera.reset();
        self.gestures.reset();
        self.score = 0;
        self.frontier = self
            .level
            .initialize(self.config.viewport.height, self.config.level.initial_levels);
    }

    fn restart(&mut self, bus: &mut MessageBus) {
        self.restarts += 1;
        info!(
            target: "session",
            "Player fell at score {}, restarting (run #{})",
            self.score,
            self.restarts + 1
        );

        self.start();

        let (player_x, player_y) = self.spawn_point();
        bus.push(SessionEvent::Restarted { player_x, player_y });
        bus.push(ScoreChanged { score: 0 });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
