//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing from the platform (window) thread to the core thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::PointerEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the crossbeam channel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Pointer events for one rendered frame, in arrival order.
    Inputs(Vec<PointerEvent>),

    /// Window close requested.
    WindowClosed,
}
