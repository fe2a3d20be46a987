use raft_election::{new_err, ElectionTimer, RaftError};
use rand::Rng;
use std::time::Duration;

pub const DEFAULT_MIN_TIMEOUT_MS: u64 = 1500;
pub const DEFAULT_MAX_TIMEOUT_MS: u64 = 3000;

/// Election timer with a timeout drawn uniformly from
/// `[range_start_ms, range_stop_ms)` on every request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RandomizedElectionTimer {
    range_start_ms: u64,
    range_stop_ms: u64,
}

impl RandomizedElectionTimer {
    /// Creates new RandomizedElectionTimer with time range in milliseconds.
    /// The range start must be positive and below the range stop.
    pub fn new(range_start_ms: u64, range_stop_ms: u64) -> Result<RandomizedElectionTimer, RaftError> {
        if range_start_ms == 0 || range_start_ms >= range_stop_ms {
            return new_err(
                "Invalid election timer params".to_string(),
                format!(
                    "range_start_ms : {}, range_stop_ms : {}",
                    range_start_ms, range_stop_ms
                ),
            );
        }

        Ok(RandomizedElectionTimer {
            range_start_ms,
            range_stop_ms,
        })
    }
}

impl Default for RandomizedElectionTimer {
    fn default() -> Self {
        RandomizedElectionTimer {
            range_start_ms: DEFAULT_MIN_TIMEOUT_MS,
            range_stop_ms: DEFAULT_MAX_TIMEOUT_MS,
        }
    }
}

impl ElectionTimer for RandomizedElectionTimer {
    fn next_elections_timeout(&self) -> Duration {
        let mut rng = rand::thread_rng();

        Duration::from_millis(rng.gen_range(self.range_start_ms, self.range_stop_ms))
    }
}
