//=========================================================================
// Tori Jump Engine
//
// Main entry point: wires the session, the world host, the core thread
// and the window together.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(host)──>  Engine  ──run()──>  [Runtime]
//         │                              │
//         ├─ with_tps()                  └─ spawns core thread
//         ├─ with_channel_capacity()        runs platform
//         ├─ with_config()                  blocks until exit
//         └─ with_seed()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::{ConfigError, GameConfig, Viewport};
use crate::core::host::WorldHost;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::session::GameSession;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 batches
/// - **Config**: [`GameConfig::default`] (360x640 viewport)
/// - **Seed**: none (entropy)
///
/// # Examples
///
/// ```no_run
/// use tori_jump::EngineBuilder;
/// use tori_jump::core::host::WorldHost;
/// use tori_jump::core::level::ItemId;
/// use tori_jump::core::message_bus::MessageBus;
/// use tori_jump::core::session::PlayerSnapshot;
///
/// struct Headless;
///
/// impl WorldHost for Headless {
///     fn step(&mut self, _dt: f32) {}
///     fn player(&self) -> PlayerSnapshot {
///         PlayerSnapshot { x: 180.0, y: 590.0, standing_on: None }
///     }
///     fn take_item_overlaps(&mut self) -> Vec<ItemId> { Vec::new() }
///     fn apply(&mut self, _bus: &MessageBus) {}
/// }
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_seed(7)
///     .build(Headless)?
///     .run();
/// # Ok::<(), tori_jump::core::config::ConfigError>(())
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            seed: None,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the game configuration. Validated in [`EngineBuilder::build`].
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Makes the platform sequence reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the session and the engine around `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the game configuration is invalid.
    pub fn build<H: WorldHost>(self, host: H) -> Result<Engine<H>, ConfigError> {
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {}, seed: {:?})",
            self.tps,
            self.channel_capacity,
            self.seed
        );

        let viewport = self.config.viewport;
        let session = match self.seed {
            Some(seed) => GameSession::with_seed(self.config, seed)?,
            None => GameSession::new(self.config)?,
        };

        Ok(Engine {
            orchestrator: CoreSystemsOrchestrator::new(session, host),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            viewport,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime owning the core thread and the window.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► GameSession, WorldHost
///   │
///   └─► Platform (Event Loop)
///         └─► Window, pointer polling
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<H: WorldHost> {
    orchestrator: CoreSystemsOrchestrator<H>,
    tps: f64,
    channel_capacity: usize,
    viewport: Viewport,
}

impl<H: WorldHost> Engine<H> {
    /// The session as built; useful for inspecting the opening level.
    pub fn session(&self) -> &GameSession {
        self.orchestrator.session()
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On close: `WindowClosed` is sent and the logic thread is joined
    pub fn run(self) {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!(target: "engine", "Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.viewport);

        if let Err(e) = platform.run() {
            error!(target: "engine", "Platform error: {}", e);
        }

        info!(target: "engine", "Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!(target: "engine", "Core thread terminated cleanly"),
            Err(e) => error!(target: "engine", "Core thread panicked: {:?}", e),
        }

        info!(target: "engine", "Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
