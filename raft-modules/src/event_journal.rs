use parking_lot::Mutex;
use raft_election::{NodeEvent, NodeEventListener};
use std::sync::Arc;

/// Records node events in arrival order. Clones share the same journal, so
/// one journal can be handed to every node of a cluster.
#[derive(Clone, Debug, Default)]
pub struct EventJournal {
    events: Arc<Mutex<Vec<NodeEvent>>>,
}

impl EventJournal {
    pub fn new() -> EventJournal {
        EventJournal::default()
    }

    pub fn events(&self) -> Vec<NodeEvent> {
        self.events.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn events_of(&self, node_id: u64) -> Vec<NodeEvent> {
        let mut events = self.events();
        events.retain(|event| event.node_id() == node_id);

        events
    }
}

impl NodeEventListener for EventJournal {
    fn on_event(&self, event: &NodeEvent) {
        self.events.lock().push(event.clone());
    }
}
