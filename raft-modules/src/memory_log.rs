use raft_election::{new_err, EntrySequence, LogEntry, OperationLog, RaftError};

/// In-memory append-only log. Entry ids come from the sequence shared by all
/// the logs of a simulation.
#[derive(Clone, Debug)]
pub struct MemoryOperationLog {
    sequence: EntrySequence,
    entries: Vec<LogEntry>,
}

impl MemoryOperationLog {
    pub fn new(sequence: EntrySequence) -> MemoryOperationLog {
        MemoryOperationLog {
            sequence,
            entries: Vec::new(),
        }
    }

    fn last_sequence_id(&self) -> Option<u64> {
        self.entries.last().map(|entry| entry.sequence_id)
    }
}

impl OperationLog for MemoryOperationLog {
    fn create_next_entry(&mut self, operation: &str) -> LogEntry {
        LogEntry {
            sequence_id: self.sequence.next_id(),
            operation: operation.to_string(),
        }
    }

    fn append_entry(&mut self, entry: LogEntry) -> Result<(), RaftError> {
        if let Some(last_id) = self.last_sequence_id() {
            if entry.sequence_id <= last_id {
                return new_err(
                    format!("Cannot append entry {}", entry.sequence_id),
                    format!("last entry id is {}", last_id),
                );
            }
        }

        trace!("Log entry appended: {}", entry);
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> Vec<LogEntry> {
        self.entries.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
