pub mod deterministic_election;
pub mod leader_step_down;
pub mod shutdown;
pub mod single_node;
pub mod smoke;
