//=========================================================================
// Message Bus
//=========================================================================
//
// Type-keyed queues shared between the session and its hosts for one
// tick. See `message_bus.rs` for the push → read → clear cycle.
//
//=========================================================================

//=== Module Declarations =================================================

mod message_bus;
mod message_queue;

//=== Public API ==========================================================

pub use message_bus::{Message, MessageBus};
