use std::time::Duration;

use crate::cluster::ClusterRegistry;
use crate::errors::{new_err, Result};
use crate::events::NodeEventListener;
use crate::leadership::ElectionTimer;
use crate::operation_log::OperationLog;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeTimings {
    /// Delay between two heartbeat broadcasts of a leader. Shorter than the
    /// smallest election timeout of the peers.
    pub heartbeat_timeout: Duration,
}

impl Default for NodeTimings {
    fn default() -> Self {
        NodeTimings {
            heartbeat_timeout: Duration::from_millis(1500),
        }
    }
}

impl NodeTimings {
    pub fn validate(&self) -> Result<()> {
        if self.heartbeat_timeout == Duration::from_millis(0) {
            return new_err(
                "Invalid node timings".to_string(),
                "heartbeat timeout must be positive".to_string(),
            );
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct NodeConfiguration<Log, Et, El>
where
    Log: OperationLog,
    Et: ElectionTimer,
    El: NodeEventListener,
{
    pub node_id: u64,
    pub cluster: ClusterRegistry,
    pub election_timer: Et,
    pub operation_log: Log,
    pub event_listener: El,
    pub timings: NodeTimings,
}
