#[macro_use]
extern crate log;

mod election;
mod event_journal;
mod memory_log;

pub use election::fixed_election_timer::FixedElectionTimer;
pub use election::randomized_election_timer::{
    RandomizedElectionTimer, DEFAULT_MAX_TIMEOUT_MS, DEFAULT_MIN_TIMEOUT_MS,
};
pub use event_journal::EventJournal;
pub use memory_log::MemoryOperationLog;
