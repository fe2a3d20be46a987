/// Vote request broadcast by a candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
#[display(fmt = "Vote request: candidate {} term {}", candidate_id, term)]
pub struct VoteRequest {
    pub candidate_id: u64,
    pub term: u64,
}

/// Vote granted to a candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
#[display(fmt = "Vote: voter {} term {}", voter_id, term)]
pub struct Vote {
    pub voter_id: u64,
    pub term: u64,
}

/// Leadership assertion sent by a leader to its peers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
#[display(fmt = "Heartbeat: leader {} term {}", leader_id, term)]
pub struct HeartbeatRequest {
    pub leader_id: u64,
    pub term: u64,
}

/// Peer-call surface of a consensus node.
///
/// Calls are synchronous and are executed on the caller's thread. They cannot
/// fail: there is no transport between nodes.
pub trait ConsensusPeer: Send + Sync {
    /// Node id. Immutable for the node's lifetime.
    fn id(&self) -> u64;

    /// Arbitrates a vote request. A granted vote is delivered by calling
    /// `receive_vote` on the candidate before this call returns.
    fn request_vote(&self, request: VoteRequest);

    /// Counts a vote granted to this node.
    fn receive_vote(&self, vote: Vote);

    fn receive_heartbeat(&self, request: HeartbeatRequest);
}
