use raft_election::{NodeStatus, NodeTimings};
use raft_modules::FixedElectionTimer;

use crate::steps;

/// Node 1 times out long before the others and wins term 1 alone.
pub fn run() {
    let timers = vec![
        FixedElectionTimer::new(10),
        FixedElectionTimer::new(1000),
        FixedElectionTimer::new(1000),
    ];
    let cluster = steps::cluster::start_cluster(timers, NodeTimings::default());

    steps::sleep_ms(400);
    cluster.terminate();

    assert_eq!(vec![1], cluster.leaders());
    assert_eq!(1, cluster.node(1).current_term());
    assert!(cluster.node(1).votes() > 3 / 2);
    for node_id in 2..=3 {
        assert_eq!(NodeStatus::Follower, cluster.node(node_id).status());
        assert_eq!(1, cluster.node(node_id).current_term());
    }
    assert_eq!(vec![(1, 1)], steps::checks::leader_terms(&cluster.journal));
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_deterministic_election() {
        crate::steps::init_logger();
        super::run()
    }
}
