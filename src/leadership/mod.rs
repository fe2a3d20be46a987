use std::time::Duration;

pub mod election;
pub mod vote_request_processor;

/// Source of election timeouts. Queried every time the election slot is
/// armed, so randomized implementations give a fresh delay per election.
pub trait ElectionTimer: Send + Sync + 'static {
    fn next_elections_timeout(&self) -> Duration;
}
