use crate::cluster::ClusterRegistry;
use crate::events::{emit, NodeEvent, NodeEventListener};
use crate::operation_log::LogEntry;

/// One-shot replication notice sent when a node takes leadership: one event
/// per (peer, entry) pair. Nothing is acknowledged, retried or tracked, and
/// entries appended later are not propagated.
pub fn notify_replication<El: NodeEventListener>(
    cluster: &ClusterRegistry,
    leader_id: u64,
    entries: &[LogEntry],
    listener: &El,
) {
    cluster.for_each_peer(leader_id, |peer| {
        for entry in entries {
            emit(
                listener,
                NodeEvent::EntryReplicated {
                    node_id: leader_id,
                    peer_id: peer.id(),
                    entry: entry.clone(),
                },
            );
        }
    });
}
