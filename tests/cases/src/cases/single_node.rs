use raft_election::{NodeStatus, NodeTimings};
use raft_modules::FixedElectionTimer;

use crate::steps;

/// A sole node wins on its own vote and has nobody to call.
pub fn run() {
    let cluster =
        steps::cluster::start_cluster(vec![FixedElectionTimer::new(10)], NodeTimings::default());

    steps::sleep_ms(200);
    cluster.terminate();

    let node = cluster.node(1);
    assert_eq!(NodeStatus::Leader, node.status());
    assert_eq!(1, node.current_term());
    assert_eq!(1, node.votes());
    assert_eq!(2, node.log_entries().len());
    assert!(steps::checks::replicated_pairs(&cluster.journal, 1).is_empty());
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_single_node() {
        crate::steps::init_logger();
        super::run()
    }
}
