//=========================================================================
// Core Systems Orchestrator
//
// Drives the game session on the logic (non-platform) thread.
//
// Responsibilities:
// - Receive pointer batches from the platform via crossbeam channel
// - Step the world host, then the session, at a fixed tick rate (TPS)
// - Hand each tick's messages back to the host
//
// Tick order:
// ```text
//   collect_frame() ─► host.step(dt) ─► host.player()
//                                       host.take_item_overlaps()
//                   ─► bus.clear_all() ─► session.tick() ─► host.apply(&bus)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod host;
pub mod input;
pub mod level;
pub mod message_bus;
pub mod session;

pub(crate) mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Modules ====================================================

use host::WorldHost;
use input::PointerEvent;
use message_bus::MessageBus;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use session::{FrameInput, GameSession};

//=== CoreSystemsOrchestrator =============================================

/// Owns the session, the host and the per-tick message bus.
pub(crate) struct CoreSystemsOrchestrator<H: WorldHost> {
    session: GameSession,
    host: H,
    bus: MessageBus,
}

impl<H: WorldHost> CoreSystemsOrchestrator<H> {
    //--- Construction -----------------------------------------------------

    pub fn new(session: GameSession, host: H) -> Self {
        Self {
            session,
            host,
            bus: MessageBus::new(),
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects pointer events (exit on close/disconnect)
    //  2. Runs one simulation tick
    //  3. Sleeps to maintain fixed pacing
    //
    pub fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut ticks: u64 = 0;

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!(
                        target: "engine",
                        "Core thread exiting after {} ticks (score {})",
                        ticks,
                        self.session.score()
                    );
                    break;
                }

                //--- Step 2: Simulate --------------------------------------
                self.tick(collector.pointer_events(), dt);
                ticks += 1;

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- tick() ----------------------------------------------------------

    /// Runs one host step and one session tick.
    pub fn tick(&mut self, pointer_events: &[PointerEvent], dt: f32) {
        self.host.step(dt);
        let player = self.host.player();
        let overlaps = self.host.take_item_overlaps();

        self.bus.clear_all();
        self.session.tick(
            &FrameInput {
                dt,
                player,
                pointer_events,
                item_overlaps: &overlaps,
            },
            &mut self.bus,
        );

        if self.bus.total() > 0 {
            debug!(target: "engine", "Dispatching {} messages to host", self.bus.total());
        }
        self.host.apply(&self.bus);
    }

    //--- Accessors --------------------------------------------------------

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
