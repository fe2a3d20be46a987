use crate::cluster::ClusterRegistry;
use crate::communication::peers::VoteRequest;

/// Sends the vote request to every other registered node, one after another.
/// Each callee may grant its vote back to the candidate before its call
/// returns.
pub fn request_votes(cluster: &ClusterRegistry, request: VoteRequest) {
    let mut peers_asked = 0;
    cluster.for_each_peer(request.candidate_id, |peer| {
        trace!(
            "Node {} requesting vote from node {} for term {}",
            request.candidate_id,
            peer.id(),
            request.term
        );
        peer.request_vote(request);
        peers_asked += 1;
    });

    if peers_asked == 0 {
        warn!("Election with no peers");
    }
}
