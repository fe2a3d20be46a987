use std::collections::HashMap;

use raft_election::NodeEvent;
use raft_modules::EventJournal;

/// (peer, entry id) pairs the leader announced as replicated, in order.
pub fn replicated_pairs(journal: &EventJournal, leader_id: u64) -> Vec<(u64, u64)> {
    journal
        .events_of(leader_id)
        .into_iter()
        .filter_map(|event| match event {
            NodeEvent::EntryReplicated { peer_id, entry, .. } => Some((peer_id, entry.sequence_id)),
            _ => None,
        })
        .collect()
}

pub fn leader_terms(journal: &EventJournal) -> Vec<(u64, u64)> {
    journal
        .events()
        .into_iter()
        .filter_map(|event| match event {
            NodeEvent::BecameLeader { node_id, term } => Some((node_id, term)),
            _ => None,
        })
        .collect()
}

/// Every term a node reports for itself is at least the previous one.
pub fn assert_terms_never_decrease(journal: &EventJournal) {
    let mut last_terms: HashMap<u64, u64> = HashMap::new();

    for event in journal.events() {
        let own_term = match event {
            NodeEvent::ElectionStarted { node_id, term }
            | NodeEvent::TermUpdated { node_id, term, .. }
            | NodeEvent::BecameLeader { node_id, term }
            | NodeEvent::HeartbeatAccepted { node_id, term, .. } => Some((node_id, term)),
            _ => None,
        };

        if let Some((node_id, term)) = own_term {
            let last_term = last_terms.entry(node_id).or_insert(0);
            assert!(
                term >= *last_term,
                "Node {} term decreased from {} to {}",
                node_id,
                last_term,
                term
            );
            *last_term = term;
        }
    }
}
