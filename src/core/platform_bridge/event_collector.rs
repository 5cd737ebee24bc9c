//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side draining of platform events with shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → pointer_events → TickControl
//
// Draining is bounded per tick so a flooded channel cannot starve the
// simulation; leftovers are picked up next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::PointerEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    pointer_events: Vec<PointerEvent>,
}

impl EventCollector {
    const MAX_BATCHES_PER_TICK: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            pointer_events: Vec::with_capacity(32),
        }
    }

    /// Drains pending platform events into this tick's pointer list.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.pointer_events.clear();

        for _ in 0..Self::MAX_BATCHES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => self.pointer_events.extend(batch),
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        warn!(
            target: "engine",
            "Platform event backlog: {} batches drained this tick",
            Self::MAX_BATCHES_PER_TICK
        );
        TickControl::Continue
    }

    /// Pointer events collected by the last `collect_frame()`.
    pub(crate) fn pointer_events(&self) -> &[PointerEvent] {
        &self.pointer_events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn down(time_ms: u64) -> PointerEvent {
        PointerEvent::Down { x: 0.0, y: 0.0, time_ms }
    }

    #[test]
    fn empty_channel_continues_with_no_events() {
        let (_tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.pointer_events().is_empty());
    }

    #[test]
    fn batches_are_concatenated_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![down(1), down(2)])).unwrap();
        tx.send(PlatformEvent::Inputs(vec![down(3)])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.pointer_events(), &[down(1), down(2), down(3)]);
    }

    #[test]
    fn events_are_cleared_between_frames() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![down(1)])).unwrap();
        collector.collect_frame();
        collector.collect_frame();

        assert!(collector.pointer_events().is_empty());
    }

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn disconnected_channel_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_bounded_per_tick() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for i in 0..150 {
            tx.send(PlatformEvent::Inputs(vec![down(i)])).unwrap();
        }

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.pointer_events().len(), 100);

        collector.collect_frame();
        assert_eq!(collector.pointer_events().len(), 50);
    }
}
