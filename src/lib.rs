//=========================================================================
// Tori Jump — Library Root
//
// Core of an endless vertical platform jumper: a procedurally extended
// ladder of moving platforms, recycled below the camera, carrying
// collectible items, steered by pointer gestures.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose `core` (level, session, input, message bus, host contract)
//   for hosts and headless drivers
// - Keep the windowing layer (`platform`) private
//
// Typical usage:
// ```ignore
// use tori_jump::EngineBuilder;
//
// fn main() -> Result<(), tori_jump::core::config::ConfigError> {
//     EngineBuilder::new().build(MyPhysicsHost::new())?.run();
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game logic and the host contract. Headless drivers
// can use `core::session::GameSession` directly without a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` wraps Winit (window, event loop, pointer polling).
// `engine` wires platform and core threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
