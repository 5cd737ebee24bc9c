//=========================================================================
// Message Bus
//=========================================================================
//
// Typed per-tick mailbox between the game session and its hosts.
//
// Architecture:
//   GameSession → push<M>() / extend<M>() → HashMap<TypeId, Vec<M>>
//                                               ↓
//   WorldHost   ← read<M>()  (any number of readers)
//                                               ↓
//   Orchestrator → clear_all() at the start of every tick
//
// Messages carried today: LevelEvent, PlayerCommand, ScoreChanged,
// SessionEvent.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::error;

//=== Internal Dependencies ===============================================

use super::message_queue::MessageQueue;

//=== Message =============================================================

/// Marker for types that can travel on the bus.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== MessageBus ==========================================================

/// One queue per message type; messages live until the next clear.
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    //--- Publishing -------------------------------------------------------

    /// Appends a message to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        if let Some(queue) = self.queue_mut::<M>() {
            queue.push(msg);
        }
    }

    /// Appends every message from `msgs`, preserving order.
    pub fn extend<M: Message, I: IntoIterator<Item = M>>(&mut self, msgs: I) {
        if let Some(queue) = self.queue_mut::<M>() {
            queue.extend(msgs);
        }
    }

    //--- Reading ----------------------------------------------------------

    /// All queued messages of type `M`, oldest first.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn has_messages<M: Message>(&self) -> bool {
        !self.read::<M>().is_empty()
    }

    pub fn count<M: Message>(&self) -> usize {
        self.read::<M>().len()
    }

    /// Total number of queued messages across every type.
    pub fn total(&self) -> usize {
        self.queues.values().map(|q| q.len()).sum()
    }

    //--- Clearing ---------------------------------------------------------

    /// Clears messages of type `M`, keeping the allocation.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queue_mut::<M>() {
            queue.clear();
        }
    }

    /// Clears every queue, keeping entries and allocations for reuse.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
    }

    fn queue_mut<M: Message>(&mut self) -> Option<&mut Vec<M>> {
        let queue = self
            .queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<M>>();

        if queue.is_none() {
            error!(target: "bus", "Queue type mismatch for {}", std::any::type_name::<M>());
        }
        queue
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::PlayerCommand;
    use crate::core::session::ScoreChanged;

    #[test]
    fn new_bus_is_empty() {
        let bus = MessageBus::new();
        assert!(!bus.has_messages::<ScoreChanged>());
        assert_eq!(bus.count::<ScoreChanged>(), 0);
        assert_eq!(bus.total(), 0);
    }

    #[test]
    fn push_and_read_in_order() {
        let mut bus = MessageBus::new();
        bus.push(ScoreChanged { score: 1 });
        bus.push(ScoreChanged { score: 2 });

        assert_eq!(bus.read::<ScoreChanged>(), &[ScoreChanged { score: 1 }, ScoreChanged { score: 2 }]);
        // Reading does not consume.
        assert_eq!(bus.count::<ScoreChanged>(), 2);
    }

    #[test]
    fn types_have_separate_queues() {
        let mut bus = MessageBus::new();
        bus.push(ScoreChanged { score: 3 });
        bus.push(PlayerCommand::DampX { factor: 0.95 });
        bus.push(PlayerCommand::Carry { dx: 1.5 });

        assert_eq!(bus.count::<ScoreChanged>(), 1);
        assert_eq!(bus.count::<PlayerCommand>(), 2);
        assert_eq!(bus.total(), 3);
    }

    #[test]
    fn extend_appends_after_existing() {
        let mut bus = MessageBus::new();
        bus.push(ScoreChanged { score: 1 });
        bus.extend((2..=3).map(|score| ScoreChanged { score }));

        let scores: Vec<u32> = bus.read::<ScoreChanged>().iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![1, 2, 3]);
    }

    #[test]
    fn clear_only_touches_one_type() {
        let mut bus = MessageBus::new();
        bus.push(ScoreChanged { score: 1 });
        bus.push(PlayerCommand::DampX { factor: 0.95 });

        bus.clear::<ScoreChanged>();

        assert!(!bus.has_messages::<ScoreChanged>());
        assert!(bus.has_messages::<PlayerCommand>());
    }

    #[test]
    fn clear_all_empties_and_allows_reuse() {
        let mut bus = MessageBus::new();
        for score in 0..50 {
            bus.push(ScoreChanged { score });
        }
        bus.push(PlayerCommand::Carry { dx: 0.0 });

        bus.clear_all();
        assert_eq!(bus.total(), 0);

        bus.push(ScoreChanged { score: 9 });
        assert_eq!(bus.read::<ScoreChanged>(), &[ScoreChanged { score: 9 }]);
    }
}
