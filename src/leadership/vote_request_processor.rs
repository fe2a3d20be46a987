use crate::communication::peers::VoteRequest;
use crate::node::state::{NodeState, TermObservation};
use crate::operation_log::OperationLog;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VoteDecision {
    pub term_observation: TermObservation,
    pub vote_granted: bool,
}

/// Adopts a higher candidate term first, then grants the vote if the node is
/// a follower of the candidate's term.
pub fn process_vote_request<Log: OperationLog>(
    node_state: &mut NodeState<Log>,
    request: &VoteRequest,
) -> VoteDecision {
    let term_observation = node_state.observe_term(request.term);
    let vote_granted = node_state.can_grant_vote(request.term);

    VoteDecision {
        term_observation,
        vote_granted,
    }
}
