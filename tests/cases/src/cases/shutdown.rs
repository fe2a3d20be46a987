use std::time::Duration;

use raft_election::{NodeEvent, NodeTimings};
use raft_modules::RandomizedElectionTimer;

use crate::steps;

const MAX_TIMEOUT_MS: u64 = 60;

/// Nothing is emitted once every node is stopped, and stopping twice is
/// harmless.
pub fn run() {
    let timers: Vec<RandomizedElectionTimer> = (0..3)
        .map(|_| RandomizedElectionTimer::new(20, MAX_TIMEOUT_MS).expect("valid bounds"))
        .collect();
    let timings = NodeTimings {
        heartbeat_timeout: Duration::from_millis(10),
    };
    let cluster = steps::cluster::start_cluster(timers, timings);

    steps::sleep_ms(300);
    cluster.terminate();
    cluster.terminate();

    let events_after_shutdown = cluster.journal.len();
    steps::sleep_ms(5 * MAX_TIMEOUT_MS);

    assert_eq!(events_after_shutdown, cluster.journal.len());
    let stopped = cluster
        .journal
        .events()
        .into_iter()
        .filter(|event| match event {
            NodeEvent::Stopped { .. } => true,
            _ => false,
        })
        .count();
    assert_eq!(3, stopped);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_shutdown() {
        crate::steps::init_logger();
        super::run()
    }
}
