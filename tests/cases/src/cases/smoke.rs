use std::collections::HashSet;
use std::time::Duration;

use raft_election::NodeTimings;
use raft_modules::RandomizedElectionTimer;

use crate::steps;

/// Randomized 3-node run: somebody gets elected and no node ever sees its
/// term go down.
pub fn run() {
    let timers: Vec<RandomizedElectionTimer> = (0..3)
        .map(|_| RandomizedElectionTimer::new(150, 300).expect("valid bounds"))
        .collect();
    let timings = NodeTimings {
        heartbeat_timeout: Duration::from_millis(75),
    };
    let cluster = steps::cluster::start_cluster(timers, timings);

    steps::sleep_ms(2000);
    cluster.terminate();

    let leader_terms = steps::checks::leader_terms(&cluster.journal);
    trace!("Leader terms: {:?}", leader_terms);
    assert!(!leader_terms.is_empty());
    steps::checks::assert_terms_never_decrease(&cluster.journal);

    let entry_ids: Vec<u64> = cluster
        .nodes
        .iter()
        .flat_map(|node| node.log_entries())
        .map(|entry| entry.sequence_id)
        .collect();
    let unique_ids: HashSet<u64> = entry_ids.iter().cloned().collect();
    assert_eq!(2 * leader_terms.len(), entry_ids.len());
    assert_eq!(entry_ids.len(), unique_ids.len());
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_smoke() {
        crate::steps::init_logger();
        super::run()
    }
}
