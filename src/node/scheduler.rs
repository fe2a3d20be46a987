use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::time::Instant;

use super::Node;
use crate::events::NodeEventListener;
use crate::leadership::ElectionTimer;
use crate::operation_log::OperationLog;

/// Leadership tenure changes reported to the node scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerCommand {
    LeadershipGained,
    LeadershipLost,
}

pub struct NodeSchedulerParams<Log, Et, El>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    pub node: Arc<Node<Log, Et, El>>,
    pub command_rx: Receiver<SchedulerCommand>,
}

/// Single-threaded timer queue of a node. Holds one election slot and one
/// heartbeat slot; arming a slot replaces its previous deadline. Callbacks
/// run to completion, peer calls included, before the next event is taken.
pub fn run_node_scheduler<Log, Et, El>(
    params: NodeSchedulerParams<Log, Et, El>,
    terminate_worker_rx: Receiver<()>,
) where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    let node = params.node;
    info!("Node {} scheduler worker started", node.id());

    let mut election_deadline = Some(Instant::now() + node.next_election_timeout());
    let mut heartbeat_deadline: Option<Instant> = None;

    loop {
        let election_timeout = timeout_channel(election_deadline);
        let heartbeat_timeout = timeout_channel(heartbeat_deadline);
        select!(
            recv(terminate_worker_rx) -> res  => {
                if res.is_err() {
                    error!("Abnormal exit for node {} scheduler worker", node.id());
                }
                break
            },
            recv(election_timeout) -> _ => {
                election_deadline = None;
                if node.on_election_timeout() {
                    election_deadline = Some(Instant::now() + node.next_election_timeout());
                }
            },
            recv(heartbeat_timeout) -> _ => {
                heartbeat_deadline = None;
                if node.on_heartbeat_tick() {
                    heartbeat_deadline = Some(Instant::now() + node.heartbeat_timeout());
                }
            },
            recv(params.command_rx) -> res => {
                match res {
                    Ok(SchedulerCommand::LeadershipGained) => {
                        trace!("Node {} cancels election timer, heartbeats armed", node.id());
                        election_deadline = None;
                        heartbeat_deadline = Some(Instant::now() + node.heartbeat_timeout());
                    },
                    Ok(SchedulerCommand::LeadershipLost) => {
                        trace!("Node {} stops heartbeats, election timer armed", node.id());
                        heartbeat_deadline = None;
                        election_deadline = Some(Instant::now() + node.next_election_timeout());
                    },
                    Err(err) => {
                        error!("Invalid result from scheduler command channel: {}", err);
                        break
                    }
                }
            },
        );
    }

    info!("Node {} scheduler worker stopped", node.id());
}

fn timeout_channel(deadline: Option<Instant>) -> Receiver<Instant> {
    match deadline {
        Some(deadline) => {
            crossbeam_channel::after(deadline.saturating_duration_since(Instant::now()))
        }
        None => crossbeam_channel::never(),
    }
}
