#[macro_use]
extern crate log;

use std::io::Write;
use std::process;
use std::thread;
use std::time::Duration;

use chrono::prelude::{DateTime, Local};

use raft_election::{
    start_node, ClusterRegistry, EntrySequence, Node, NodeConfiguration, NodeTimings,
    ProtectedNode, RaftError, SilentEventListener,
};
use raft_modules::{
    MemoryOperationLog, RandomizedElectionTimer, DEFAULT_MAX_TIMEOUT_MS, DEFAULT_MIN_TIMEOUT_MS,
};

type SimulationNode = ProtectedNode<MemoryOperationLog, RandomizedElectionTimer, SilentEventListener>;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            writeln!(
                buf,
                "{:5}: {} - {}",
                record.level(),
                now.format("%H:%M:%S.%3f").to_string(),
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logger();

    let nodes = match create_cluster() {
        Ok(nodes) => nodes,
        Err(err) => {
            error!("Cannot create the cluster: {}", err);
            process::exit(1);
        }
    };

    for node in &nodes {
        if let Err(err) = start_node(node) {
            error!("{}", err);
            shutdown(&nodes);
            process::exit(1);
        }
    }

    info!("Simulation is running for {:?}", get_run_duration());
    thread::sleep(get_run_duration());

    shutdown(&nodes);
    info!("Simulation finished");
}

fn create_cluster() -> Result<Vec<SimulationNode>, RaftError> {
    let cluster = ClusterRegistry::new();
    let sequence = EntrySequence::new();
    let (min_timeout_ms, max_timeout_ms) = get_election_timeout_range();

    let mut nodes = Vec::new();
    for node_id in get_node_ids() {
        let node = Node::new(NodeConfiguration {
            node_id,
            cluster: cluster.clone(),
            election_timer: RandomizedElectionTimer::new(min_timeout_ms, max_timeout_ms)?,
            operation_log: MemoryOperationLog::new(sequence.clone()),
            event_listener: SilentEventListener,
            timings: NodeTimings::default(),
        })?;

        cluster.register(&node)?;
        nodes.push(node);
    }

    Ok(nodes)
}

fn shutdown(nodes: &[SimulationNode]) {
    for node in nodes {
        node.shutdown();
    }
}

fn get_node_ids() -> Vec<u64> {
    vec![1, 2, 3]
}

fn get_run_duration() -> Duration {
    Duration::from_secs(15)
}

fn get_election_timeout_range() -> (u64, u64) {
    (DEFAULT_MIN_TIMEOUT_MS, DEFAULT_MAX_TIMEOUT_MS)
}
