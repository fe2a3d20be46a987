use crate::node::state::NodeStatus;
use crate::operation_log::LogEntry;

/// Observable narration of a node. Consumed for observation and tests only,
/// never for control.
#[derive(Clone, Debug, Eq, PartialEq, Display)]
pub enum NodeEvent {
    #[display(fmt = "Node {} started as {}", node_id, status)]
    Started { node_id: u64, status: NodeStatus },

    #[display(fmt = "Node {} starting election, term: {}", node_id, term)]
    ElectionStarted { node_id: u64, term: u64 },

    #[display(
        fmt = "Node {} received vote request from node {} for term {}",
        node_id,
        candidate_id,
        term
    )]
    VoteRequested {
        node_id: u64,
        candidate_id: u64,
        term: u64,
    },

    #[display(
        fmt = "Node {} updated term to {} and changed status to {}",
        node_id,
        term,
        status
    )]
    TermUpdated {
        node_id: u64,
        term: u64,
        status: NodeStatus,
    },

    #[display(
        fmt = "Node {} voted for node {} in term {}",
        node_id,
        candidate_id,
        term
    )]
    VoteGranted {
        node_id: u64,
        candidate_id: u64,
        term: u64,
    },

    #[display(
        fmt = "Node {} received vote from node {}, total votes: {}",
        node_id,
        voter_id,
        votes
    )]
    VoteReceived {
        node_id: u64,
        voter_id: u64,
        votes: u32,
    },

    #[display(fmt = "Node {} is now the leader for term {}", node_id, term)]
    BecameLeader { node_id: u64, term: u64 },

    #[display(fmt = "Node {} sending heartbeats for term {}", node_id, term)]
    HeartbeatsSent { node_id: u64, term: u64 },

    #[display(
        fmt = "Node {} received heartbeat from node {} and changed status to Follower for term {}",
        node_id,
        leader_id,
        term
    )]
    HeartbeatAccepted {
        node_id: u64,
        leader_id: u64,
        term: u64,
    },

    #[display(fmt = "Node {} replicated to node {}: {}", node_id, peer_id, entry)]
    EntryReplicated {
        node_id: u64,
        peer_id: u64,
        entry: LogEntry,
    },

    #[display(fmt = "Node {} stopped", node_id)]
    Stopped { node_id: u64 },
}

impl NodeEvent {
    pub fn node_id(&self) -> u64 {
        match self {
            NodeEvent::Started { node_id, .. }
            | NodeEvent::ElectionStarted { node_id, .. }
            | NodeEvent::VoteRequested { node_id, .. }
            | NodeEvent::TermUpdated { node_id, .. }
            | NodeEvent::VoteGranted { node_id, .. }
            | NodeEvent::VoteReceived { node_id, .. }
            | NodeEvent::BecameLeader { node_id, .. }
            | NodeEvent::HeartbeatsSent { node_id, .. }
            | NodeEvent::HeartbeatAccepted { node_id, .. }
            | NodeEvent::EntryReplicated { node_id, .. }
            | NodeEvent::Stopped { node_id } => *node_id,
        }
    }
}

/// Receives every event a node emits, in emission order per node.
pub trait NodeEventListener: Send + Sync + 'static {
    fn on_event(&self, event: &NodeEvent);
}

/// Logs the event line and hands the event to the listener.
pub fn emit<El: NodeEventListener + ?Sized>(listener: &El, event: NodeEvent) {
    match &event {
        NodeEvent::HeartbeatsSent { .. } => debug!("{}", event),
        _ => info!("{}", event),
    }

    listener.on_event(&event);
}

/// Listener for runs that only need the log output.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentEventListener;

impl NodeEventListener for SilentEventListener {
    fn on_event(&self, _event: &NodeEvent) {}
}
