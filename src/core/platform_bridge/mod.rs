//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing layer and the core thread.
//
// Components:
// - `interface`: events crossing the thread boundary
// - `event_collector`: core-side bounded draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
