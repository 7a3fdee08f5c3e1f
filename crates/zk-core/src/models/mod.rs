pub mod args;
pub mod cluster;
pub mod command;

pub use args::ArgumentSet;
pub use cluster::{ClusterConfig, StormYaml};
pub use command::{DockerCommand, LaunchOutcome, LaunchPlan, LaunchReport};
