use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use std::fmt;
use std::mem;
use std::sync::Arc;
use std::time::Duration;

use crate::cluster::ClusterRegistry;
use crate::common;
use crate::common::RaftWorker;
use crate::communication::peers::{ConsensusPeer, HeartbeatRequest, Vote, VoteRequest};
use crate::errors::{new_err, Result};
use crate::events::{emit, NodeEvent, NodeEventListener};
use crate::leadership::election::request_votes;
use crate::leadership::vote_request_processor::process_vote_request;
use crate::leadership::ElectionTimer;
use crate::operation_log::replication::heartbeat_sender::send_heartbeats;
use crate::operation_log::replication::log_replicator::notify_replication;
use crate::operation_log::{LogEntry, OperationLog};

pub mod configuration;
pub mod scheduler;
pub mod state;

use configuration::{NodeConfiguration, NodeTimings};
use scheduler::{run_node_scheduler, NodeSchedulerParams, SchedulerCommand};
use state::{NodeState, NodeStatus};

/// Sample operations a node appends to its log when it takes leadership.
pub const LEADER_SAMPLE_OPERATIONS: [&str; 2] = ["Operation 1", "Operation 2"];

pub type ProtectedNode<Log, Et, El> = Arc<Node<Log, Et, El>>;

enum Lifecycle {
    Created,
    Running(RaftWorker),
    Stopped,
}

/// Consensus node: owns its term, role, vote tally, log and scheduler.
///
/// Peer calls arrive on foreign threads. The state lock is held only for the
/// read-modify-write of the state and is always released before this node
/// calls into another node.
pub struct Node<Log, Et, El>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    id: u64,
    state: Mutex<NodeState<Log>>,
    cluster: ClusterRegistry,
    election_timer: Et,
    event_listener: El,
    timings: NodeTimings,
    scheduler_tx: Sender<SchedulerCommand>,
    scheduler_rx: Receiver<SchedulerCommand>,
    lifecycle: Mutex<Lifecycle>,
}

impl<Log, Et, El> Node<Log, Et, El>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    pub fn new(config: NodeConfiguration<Log, Et, El>) -> Result<ProtectedNode<Log, Et, El>> {
        config.timings.validate()?;

        let (scheduler_tx, scheduler_rx): (Sender<SchedulerCommand>, Receiver<SchedulerCommand>) =
            crossbeam_channel::unbounded();

        Ok(Arc::new(Node {
            id: config.node_id,
            state: Mutex::new(NodeState::new(config.operation_log)),
            cluster: config.cluster,
            election_timer: config.election_timer,
            event_listener: config.event_listener,
            timings: config.timings,
            scheduler_tx,
            scheduler_rx,
            lifecycle: Mutex::new(Lifecycle::Created),
        }))
    }

    /// Arms the election timer on the node's own worker thread. The cluster
    /// registry must be filled beforehand. A node starts once.
    pub fn start(node: &ProtectedNode<Log, Et, El>) -> Result<()> {
        if node.cluster.is_empty() {
            return new_err(
                format!("Cannot start node {}", node.id),
                "cluster registry is empty".to_string(),
            );
        }

        let mut lifecycle = node.lifecycle.lock();
        if let Lifecycle::Created = *lifecycle {
            emit(
                &node.event_listener,
                NodeEvent::Started {
                    node_id: node.id,
                    status: node.status(),
                },
            );

            let worker = common::run_worker(
                run_node_scheduler,
                NodeSchedulerParams {
                    node: node.clone(),
                    command_rx: node.scheduler_rx.clone(),
                },
            );
            *lifecycle = Lifecycle::Running(worker);

            return Ok(());
        }

        new_err(
            format!("Cannot start node {}", node.id),
            "node was already started".to_string(),
        )
    }

    /// Cancels the pending election timer and heartbeat ticker and stops the
    /// worker. Peers are not notified. Calling it again does nothing.
    pub fn shutdown(&self) {
        let lifecycle = {
            let mut lifecycle = self.lifecycle.lock();
            mem::replace(&mut *lifecycle, Lifecycle::Stopped)
        };

        match lifecycle {
            Lifecycle::Running(worker) => {
                worker.terminate();
                emit(&self.event_listener, NodeEvent::Stopped { node_id: self.id });
            }
            Lifecycle::Created => trace!("Node {} stopped before start", self.id),
            Lifecycle::Stopped => trace!("Node {} already stopped", self.id),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn status(&self) -> NodeStatus {
        self.state.lock().status()
    }

    pub fn current_term(&self) -> u64 {
        self.state.lock().current_term()
    }

    pub fn votes(&self) -> u32 {
        self.state.lock().votes()
    }

    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.state.lock().log().entries()
    }

    pub(crate) fn next_election_timeout(&self) -> Duration {
        self.election_timer.next_elections_timeout()
    }

    pub(crate) fn heartbeat_timeout(&self) -> Duration {
        self.timings.heartbeat_timeout
    }

    /// Election timer callback. Returns true while the node keeps contending,
    /// i.e. the election timer has to be re-armed.
    pub(crate) fn on_election_timeout(&self) -> bool {
        let (term, promotion) = {
            let mut state = self.state.lock();

            let term = match state.begin_election() {
                Some(term) => term,
                None => {
                    trace!("Node {} is the leader, election timeout ignored", self.id);
                    return false;
                }
            };
            emit(
                &self.event_listener,
                NodeEvent::ElectionStarted {
                    node_id: self.id,
                    term,
                },
            );

            let promotion = if state.won_election(|votes| self.cluster.is_majority(votes)) {
                Some(self.promote_to_leader(&mut state))
            } else {
                None
            };

            (term, promotion)
        };

        if let Some(entries) = promotion {
            self.lead(term, entries);
            return false;
        }

        request_votes(
            &self.cluster,
            VoteRequest {
                candidate_id: self.id,
                term,
            },
        );

        self.status() != NodeStatus::Leader
    }

    /// Heartbeat ticker callback. Returns false once the node is no longer the
    /// leader, which ends the ticker.
    pub(crate) fn on_heartbeat_tick(&self) -> bool {
        let leader_term = {
            let state = self.state.lock();
            if state.status() != NodeStatus::Leader {
                trace!("Node {} is not the leader, heartbeats stopped", self.id);
                return false;
            }
            state.current_term()
        };

        self.broadcast_heartbeats(leader_term);
        true
    }

    fn promote_to_leader(&self, state: &mut NodeState<Log>) -> Vec<LogEntry> {
        let entries = state.promote_to_leader(&LEADER_SAMPLE_OPERATIONS);

        emit(
            &self.event_listener,
            NodeEvent::BecameLeader {
                node_id: self.id,
                term: state.current_term(),
            },
        );

        entries
    }

    // Runs without the state lock: heartbeats and replication call into peers.
    fn lead(&self, term: u64, entries: Vec<LogEntry>) {
        self.send_scheduler_command(SchedulerCommand::LeadershipGained);

        self.broadcast_heartbeats(term);
        notify_replication(&self.cluster, self.id, &entries, &self.event_listener);
    }

    fn broadcast_heartbeats(&self, term: u64) {
        emit(
            &self.event_listener,
            NodeEvent::HeartbeatsSent {
                node_id: self.id,
                term,
            },
        );

        let peers_notified = send_heartbeats(
            &self.cluster,
            HeartbeatRequest {
                leader_id: self.id,
                term,
            },
        );
        if peers_notified == 0 && self.cluster.size() > 1 {
            warn!("Node {} reached no peers with heartbeats for term {}", self.id, term);
        }
    }

    fn send_scheduler_command(&self, command: SchedulerCommand) {
        if let Err(err) = self.scheduler_tx.send(command) {
            error!("Node {} cannot send scheduler command: {}", self.id, err);
        }
    }
}

impl<Log, Et, El> ConsensusPeer for Node<Log, Et, El>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    fn id(&self) -> u64 {
        self.id
    }

    fn request_vote(&self, request: VoteRequest) {
        let decision = {
            let mut state = self.state.lock();

            emit(
                &self.event_listener,
                NodeEvent::VoteRequested {
                    node_id: self.id,
                    candidate_id: request.candidate_id,
                    term: request.term,
                },
            );

            let decision = process_vote_request(&mut state, &request);
            if decision.term_observation.adopted() {
                emit(
                    &self.event_listener,
                    NodeEvent::TermUpdated {
                        node_id: self.id,
                        term: state.current_term(),
                        status: state.status(),
                    },
                );
            }

            decision
        };

        if decision.term_observation.leadership_lost() {
            self.send_scheduler_command(SchedulerCommand::LeadershipLost);
        }

        if !decision.vote_granted {
            return;
        }

        match self.cluster.peer(request.candidate_id) {
            Some(candidate) => {
                emit(
                    &self.event_listener,
                    NodeEvent::VoteGranted {
                        node_id: self.id,
                        candidate_id: request.candidate_id,
                        term: request.term,
                    },
                );

                candidate.receive_vote(Vote {
                    voter_id: self.id,
                    term: request.term,
                });
            }
            None => warn!(
                "Node {} cannot find candidate {} in the cluster registry",
                self.id, request.candidate_id
            ),
        }
    }

    fn receive_vote(&self, vote: Vote) {
        let promotion = {
            let mut state = self.state.lock();

            let votes = state.add_vote();
            emit(
                &self.event_listener,
                NodeEvent::VoteReceived {
                    node_id: self.id,
                    voter_id: vote.voter_id,
                    votes,
                },
            );

            if state.won_election(|votes| self.cluster.is_majority(votes)) {
                let entries = self.promote_to_leader(&mut state);
                Some((state.current_term(), entries))
            } else {
                None
            }
        };

        if let Some((term, entries)) = promotion {
            self.lead(term, entries);
        }
    }

    // A heartbeat of the current term does not reset the election timer: a
    // follower may still start an election right after a valid heartbeat.
    fn receive_heartbeat(&self, request: HeartbeatRequest) {
        let observation = {
            let mut state = self.state.lock();

            let observation = state.observe_term(request.term);
            if observation.adopted() {
                emit(
                    &self.event_listener,
                    NodeEvent::HeartbeatAccepted {
                        node_id: self.id,
                        leader_id: request.leader_id,
                        term: request.term,
                    },
                );
            } else {
                trace!("Node {} received heartbeat from node {}", self.id, request.leader_id);
            }

            observation
        };

        if observation.leadership_lost() {
            self.send_scheduler_command(SchedulerCommand::LeadershipLost);
        }
    }
}

impl<Log, Et, El> fmt::Debug for Node<Log, Et, El>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("status", &state.status())
            .field("current_term", &state.current_term())
            .field("votes", &state.votes())
            .field("log_len", &state.log().len())
            .field("peers", &self.cluster.peers(self.id))
            .finish()
    }
}
