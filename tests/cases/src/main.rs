use cases::cases::{
    deterministic_election, immediate_leader, leader_step_down, shutdown, single_node, smoke,
};
use cases::steps;

fn main() {
    steps::init_logger();

    immediate_leader::run();
    deterministic_election::run();
    single_node::run();
    leader_step_down::run();
    shutdown::run();
    smoke::run();
}
