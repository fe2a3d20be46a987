use parking_lot::Mutex;
use raft_election::ElectionTimer;
use std::collections::VecDeque;
use std::time::Duration;

/// Election timer returning a scripted list of timeouts, then repeating the
/// last one.
#[derive(Debug)]
pub struct ScriptedElectionTimer {
    timeouts_ms: Mutex<VecDeque<u64>>,
    last_timeout_ms: u64,
}

impl ScriptedElectionTimer {
    pub fn new(timeouts_ms: Vec<u64>) -> ScriptedElectionTimer {
        let last_timeout_ms = *timeouts_ms.last().expect("at least one scripted timeout");

        ScriptedElectionTimer {
            timeouts_ms: Mutex::new(timeouts_ms.into_iter().collect()),
            last_timeout_ms,
        }
    }
}

impl ElectionTimer for ScriptedElectionTimer {
    fn next_elections_timeout(&self) -> Duration {
        let timeout_ms = self
            .timeouts_ms
            .lock()
            .pop_front()
            .unwrap_or(self.last_timeout_ms);

        Duration::from_millis(timeout_ms)
    }
}
