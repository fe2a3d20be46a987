#![warn(missing_debug_implementations, unsafe_code)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate crossbeam_channel;
#[macro_use]
extern crate derive_more;

mod cluster;
mod common;
mod communication;
mod errors;
mod events;
mod leadership;
mod node;
mod operation_log;

pub use cluster::ClusterRegistry;
pub use communication::peers::{ConsensusPeer, HeartbeatRequest, Vote, VoteRequest};
pub use errors::{new_err, RaftError};
pub use events::{NodeEvent, NodeEventListener, SilentEventListener};
pub use leadership::ElectionTimer;
pub use node::configuration::{NodeConfiguration, NodeTimings};
pub use node::state::NodeStatus;
pub use node::{Node, ProtectedNode, LEADER_SAMPLE_OPERATIONS};
pub use operation_log::{EntrySequence, LogEntry, OperationLog};

/// Arms the node's election timer on its own worker thread.
pub fn start_node<Log, Et, El>(node: &ProtectedNode<Log, Et, El>) -> Result<(), RaftError>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    Node::start(node)
}
