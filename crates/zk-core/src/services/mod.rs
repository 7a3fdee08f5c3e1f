pub mod addresses;
pub mod args;
pub mod cluster_config;
pub mod docker;
pub mod docker_run;
pub mod environment;
pub mod launcher;
