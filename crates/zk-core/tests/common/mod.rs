// Each test binary compiles this module independently and uses a different
// subset of helpers, so unused-function warnings are expected.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::sync::Mutex;

use async_trait::async_trait;

use zk_core::error::{LauncherError, Result};
use zk_core::models::{ClusterConfig, DockerCommand};
use zk_core::services::docker::CommandRunner;
use zk_core::services::docker_run;
use zk_core::services::environment::ClusterEnvironment;

/// Cluster with one Zookeeper server publishing a single port.
pub const SINGLE_PORT_CLUSTER: &str = r#"
is_localhost_setup: false
servers:
  zk1: 10.0.0.11
  nimbus: 10.0.0.10
storm.yaml:
  storm.zookeeper.servers: [zk1]
zookeeper_ports: [2181]
"#;

pub const ZK_HOST: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 11);
pub const NIMBUS_HOST: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 10);

/// In-memory cluster environment using the real docker argument builders.
pub struct FakeEnvironment {
    config_yaml: String,
    local_addresses: BTreeSet<Ipv4Addr>,
    pub address_queries: Mutex<Vec<(bool, bool)>>,
}

impl FakeEnvironment {
    pub fn new(config_yaml: &str, local_addresses: &[Ipv4Addr]) -> Self {
        Self {
            config_yaml: config_yaml.to_string(),
            local_addresses: local_addresses.iter().copied().collect(),
            address_queries: Mutex::new(Vec::new()),
        }
    }

    /// This host is `zk1` of [`SINGLE_PORT_CLUSTER`].
    pub fn zookeeper_host() -> Self {
        Self::new(SINGLE_PORT_CLUSTER, &[ZK_HOST])
    }
}

#[async_trait]
impl ClusterEnvironment for FakeEnvironment {
    async fn load_cluster_config(&self) -> Result<ClusterConfig> {
        serde_yaml::from_str(&self.config_yaml)
            .map_err(|e| LauncherError::InvalidConfig(e.to_string()))
    }

    async fn resolve_local_addresses(
        &self,
        is_single_machine: bool,
        all_cloud_instances: bool,
    ) -> Result<BTreeSet<Ipv4Addr>> {
        self.address_queries
            .lock()
            .unwrap()
            .push((is_single_machine, all_cloud_instances));
        Ok(self.local_addresses.clone())
    }

    fn build_container_args(
        &self,
        config: &ClusterConfig,
        extra_args: &[String],
        local_addresses: &BTreeSet<Ipv4Addr>,
    ) -> Vec<String> {
        docker_run::build_container_args(config, extra_args, local_addresses)
    }

    fn build_port_publish_flags(
        &self,
        config: &ClusterConfig,
        service_names: &[&str],
    ) -> Vec<String> {
        docker_run::build_port_publish_flags(config, service_names)
    }
}

/// Records every command instead of running docker.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Mutex<Vec<DockerCommand>>,
    fail_first_spawn: bool,
    exit_code: Option<i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            exit_code: Some(0),
            ..Self::default()
        }
    }

    /// The first launch fails to spawn; later ones succeed.
    pub fn failing_first_spawn() -> Self {
        Self {
            fail_first_spawn: true,
            ..Self::new()
        }
    }

    pub fn exiting_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<DockerCommand> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &DockerCommand) -> Result<Option<i32>> {
        let mut calls = self.calls.lock().unwrap();
        let first = calls.is_empty();
        calls.push(command.clone());
        if first && self.fail_first_spawn {
            return Err(LauncherError::Docker("failed to start docker: not found".into()));
        }
        Ok(self.exit_code)
    }
}

pub fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
