pub mod replication;

use crate::errors::RaftError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Immutable unit of replicated state.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Display)]
#[display(fmt = "LogEntry {{ id: {}, operation: '{}' }}", sequence_id, operation)]
pub struct LogEntry {
    /// Simulation-wide sequence number. Increases across nodes and elections.
    pub sequence_id: u64,
    pub operation: String,
}

/// Source of log entry sequence ids shared by every node of a simulation.
/// Clones observe the same counter.
#[derive(Clone, Debug, Default)]
pub struct EntrySequence {
    next_id: Arc<AtomicU64>,
}

impl EntrySequence {
    pub fn new() -> EntrySequence {
        EntrySequence::default()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

/// Append-only, ordered log of a single node.
pub trait OperationLog: Sync + Send + 'static {
    fn create_next_entry(&mut self, operation: &str) -> LogEntry;
    fn append_entry(&mut self, entry: LogEntry) -> Result<(), RaftError>;
    fn entries(&self) -> Vec<LogEntry>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
