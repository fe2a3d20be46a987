use std::time::Duration;

use raft_election::{NodeEvent, NodeStatus, NodeTimings};

use crate::steps;
use crate::steps::timers::ScriptedElectionTimer;

/// Node 1 leads term 1. Heartbeats do not hold back node 2's own timeout, so
/// node 2 takes term 2 and node 1's heartbeat ticker stops.
pub fn run() {
    let timers = vec![
        ScriptedElectionTimer::new(vec![10, 10000]),
        ScriptedElectionTimer::new(vec![300, 10000]),
        ScriptedElectionTimer::new(vec![10000]),
    ];
    let timings = NodeTimings {
        heartbeat_timeout: Duration::from_millis(50),
    };
    let cluster = steps::cluster::start_cluster(timers, timings);

    steps::sleep_ms(600);
    cluster.terminate();

    assert_eq!(vec![2], cluster.leaders());
    for node_id in 1..=3 {
        assert_eq!(2, cluster.node(node_id).current_term());
    }
    assert_eq!(
        vec![(1, 1), (2, 2)],
        steps::checks::leader_terms(&cluster.journal)
    );

    let node1_heartbeat_terms: Vec<u64> = cluster
        .journal
        .events_of(1)
        .into_iter()
        .filter_map(|event| match event {
            NodeEvent::HeartbeatsSent { term, .. } => Some(term),
            _ => None,
        })
        .collect();
    assert!(node1_heartbeat_terms.len() >= 2);
    assert!(node1_heartbeat_terms.iter().all(|&term| term == 1));

    assert_eq!(NodeStatus::Follower, cluster.node(1).status());
    assert_eq!(2, cluster.node(1).log_entries().len());
    let leader_ids: Vec<u64> = cluster
        .node(2)
        .log_entries()
        .iter()
        .map(|e| e.sequence_id)
        .collect();
    assert_eq!(vec![2, 3], leader_ids);
    steps::checks::assert_terms_never_decrease(&cluster.journal);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_leader_step_down() {
        crate::steps::init_logger();
        super::run()
    }
}
