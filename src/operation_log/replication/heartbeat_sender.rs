use crate::cluster::ClusterRegistry;
use crate::communication::peers::HeartbeatRequest;

/// Delivers the heartbeat to every other registered node. Each call completes
/// in the callee before the next peer is contacted. Returns the number of
/// peers reached.
pub fn send_heartbeats(cluster: &ClusterRegistry, request: HeartbeatRequest) -> usize {
    let mut peers_notified = 0;
    cluster.for_each_peer(request.leader_id, |peer| {
        trace!(
            "Node {} sending heartbeat to node {}",
            request.leader_id,
            peer.id()
        );
        peer.receive_heartbeat(request);
        peers_notified += 1;
    });

    peers_notified
}
