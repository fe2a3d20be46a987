use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::communication::peers::ConsensusPeer;
use crate::errors::{new_err, Result};

/// Shared, append-only registry of the cluster nodes. Used for peer discovery
/// and broadcast iteration. Clones share the same membership.
///
/// The registry keeps weak handles: nodes are owned by whoever constructed
/// them, so a node and the registry it holds do not keep each other alive.
#[derive(Clone, Default)]
pub struct ClusterRegistry {
    nodes: Arc<RwLock<Vec<RegisteredNode>>>,
}

#[derive(Clone)]
struct RegisteredNode {
    id: u64,
    handle: Weak<dyn ConsensusPeer>,
}

impl ClusterRegistry {
    pub fn new() -> ClusterRegistry {
        ClusterRegistry::default()
    }

    /// Appends a node handle. Registration is expected to complete for every
    /// node before any node starts. Ids must be unique.
    pub fn register<P: ConsensusPeer + 'static>(&self, node: &Arc<P>) -> Result<()> {
        let id = node.id();
        let mut nodes = self.nodes.write();

        if nodes.iter().any(|registered| registered.id == id) {
            return new_err(
                format!("Cannot register node {}", id),
                "duplicate node id".to_string(),
            );
        }

        let handle: Weak<dyn ConsensusPeer> = Arc::downgrade(node) as Weak<P>;
        nodes.push(RegisteredNode { id, handle });

        info!("Cluster registry: node {} registered", id);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn all_nodes(&self) -> Vec<u64> {
        self.nodes.read().iter().map(|node| node.id).collect()
    }

    pub fn peers(&self, node_id: u64) -> Vec<u64> {
        let mut peer_ids = self.all_nodes();
        peer_ids.retain(|&x| x != node_id);

        peer_ids
    }

    /// Strict majority of the registered nodes: `votes > size / 2`.
    pub fn is_majority(&self, votes: u32) -> bool {
        votes as usize > self.size() / 2
    }

    pub fn peer(&self, node_id: u64) -> Option<Arc<dyn ConsensusPeer>> {
        self.nodes
            .read()
            .iter()
            .find(|node| node.id == node_id)
            .and_then(|node| node.handle.upgrade())
    }

    /// Invokes `f` for every registered node except `exclude_id`, in
    /// registration order. The registry lock is not held while `f` runs,
    /// so `f` may call into other nodes freely.
    pub fn for_each_peer<F>(&self, exclude_id: u64, mut f: F)
    where
        F: FnMut(&dyn ConsensusPeer),
    {
        let nodes_copy = self.nodes.read().clone();

        for node in nodes_copy {
            if node.id == exclude_id {
                continue;
            }

            match node.handle.upgrade() {
                Some(peer) => f(peer.as_ref()),
                None => warn!("Cluster registry: node {} is no longer available", node.id),
            }
        }
    }
}

impl fmt::Debug for ClusterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ClusterRegistry")
            .field("nodes", &self.all_nodes())
            .finish()
    }
}
