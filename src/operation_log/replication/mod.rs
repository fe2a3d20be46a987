pub mod heartbeat_sender;
pub mod log_replicator;
