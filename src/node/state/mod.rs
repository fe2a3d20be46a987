use crate::operation_log::{LogEntry, OperationLog};


#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum NodeStatus {
    Follower,
    Candidate,
    Leader,
}

/// Mutable consensus state of one node: term, role, vote tally and log.
/// Always accessed under the node lock.
#[derive(Debug)]
pub struct NodeState<Log: OperationLog> {
    current_term: u64,
    status: NodeStatus,
    votes: u32,
    log: Log,
}

/// Result of comparing an incoming term with the node term.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TermObservation {
    /// Incoming term is higher. The node adopted it and became a follower.
    Adopted { previous_status: NodeStatus },
    Unchanged,
}

impl TermObservation {
    pub fn adopted(&self) -> bool {
        matches!(self, TermObservation::Adopted { .. })
    }

    pub fn leadership_lost(&self) -> bool {
        matches!(
            self,
            TermObservation::Adopted {
                previous_status: NodeStatus::Leader
            }
        )
    }
}

impl<Log: OperationLog> NodeState<Log> {
    pub fn new(log: Log) -> NodeState<Log> {
        NodeState {
            current_term: 0,
            status: NodeStatus::Follower,
            votes: 0,
            log,
        }
    }

    pub fn current_term(&self) -> u64 {
        self.current_term
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Starts a new election: candidate status, next term, self-vote.
    /// Returns the new term, or `None` for a leader.
    pub fn begin_election(&mut self) -> Option<u64> {
        if self.status == NodeStatus::Leader {
            return None;
        }

        self.status = NodeStatus::Candidate;
        self.current_term += 1;
        self.votes = 1;

        Some(self.current_term)
    }

    /// Adopts a higher term and steps down to follower. Lower or equal terms
    /// leave the state untouched, so the term never decreases.
    pub fn observe_term(&mut self, term: u64) -> TermObservation {
        if term <= self.current_term {
            return TermObservation::Unchanged;
        }

        let previous_status = self.status;
        self.current_term = term;
        self.status = NodeStatus::Follower;

        TermObservation::Adopted { previous_status }
    }

    /// A follower grants a vote to a candidate of its own term.
    ///
    /// There is no record of the candidate already voted for in this term: a
    /// follower asked twice at the same term grants twice. Single vote per
    /// term is not enforced.
    pub fn can_grant_vote(&self, candidate_term: u64) -> bool {
        self.status == NodeStatus::Follower && candidate_term == self.current_term
    }

    /// Counts one vote regardless of the term it was granted in.
    pub fn add_vote(&mut self) -> u32 {
        self.votes += 1;
        self.votes
    }

    /// A non-leader holding the majority wins. `is_majority` gets the tally.
    pub fn won_election<F: Fn(u32) -> bool>(&self, is_majority: F) -> bool {
        self.status != NodeStatus::Leader && is_majority(self.votes)
    }

    /// Switches to leader and appends the given operations to the log.
    /// Returns the full log after the append.
    pub fn promote_to_leader(&mut self, operations: &[&str]) -> Vec<LogEntry> {
        self.status = NodeStatus::Leader;

        for operation in operations {
            let entry = self.log.create_next_entry(operation);
            if let Err(err) = self.log.append_entry(entry) {
                error!("Cannot append leader log entry: {}", err);
            }
        }

        self.log.entries()
    }
}
