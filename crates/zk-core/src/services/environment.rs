use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ClusterConfig;
use crate::services::{addresses, cluster_config, docker_run};

/// Cluster topology, host identity and docker argument construction.
#[async_trait]
pub trait ClusterEnvironment: Send + Sync {
    async fn load_cluster_config(&self) -> Result<ClusterConfig>;

    async fn resolve_local_addresses(
        &self,
        is_single_machine: bool,
        all_cloud_instances: bool,
    ) -> Result<BTreeSet<Ipv4Addr>>;

    fn build_container_args(
        &self,
        config: &ClusterConfig,
        extra_args: &[String],
        local_addresses: &BTreeSet<Ipv4Addr>,
    ) -> Vec<String>;

    fn build_port_publish_flags(
        &self,
        config: &ClusterConfig,
        service_names: &[&str],
    ) -> Vec<String>;
}

/// Reads the cluster config from disk and inspects this machine's interfaces.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    config_path: PathBuf,
}

impl HostEnvironment {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn from_env() -> Self {
        Self::new(cluster_config::config_path_from_env())
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

#[async_trait]
impl ClusterEnvironment for HostEnvironment {
    async fn load_cluster_config(&self) -> Result<ClusterConfig> {
        cluster_config::load(&self.config_path)
    }

    async fn resolve_local_addresses(
        &self,
        is_single_machine: bool,
        all_cloud_instances: bool,
    ) -> Result<BTreeSet<Ipv4Addr>> {
        addresses::resolve_local_addresses(is_single_machine, all_cloud_instances).await
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
