use std::collections::{BTreeMap, BTreeSet};
use std::net::Ipv4Addr;

use serde::Deserialize;

pub const ZOOKEEPER_SERVICE: &str = "zookeeper";

const DEFAULT_ZOOKEEPER_PORTS: [u16; 3] = [2181, 2888, 3888];

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterConfig {
    pub servers: BTreeMap<String, Ipv4Addr>,
    pub is_localhost_setup: bool,
    #[serde(default)]
    pub all_machines_are_ec2_instances: bool,
    #[serde(rename = "storm.yaml")]
    pub storm_yaml: StormYaml,
    #[serde(default = "default_zookeeper_ports")]
    pub zookeeper_ports: Vec<u16>,
    #[serde(default)]
    pub service_ports: BTreeMap<String, Vec<u16>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StormYaml {
    #[serde(rename = "storm.zookeeper.servers", default)]
    pub zookeeper_servers: Vec<String>,
}

fn default_zookeeper_ports() -> Vec<u16> {
    DEFAULT_ZOOKEEPER_PORTS.to_vec()
}

impl ClusterConfig {
    /// First configured Zookeeper server whose address belongs to this host.
    ///
    /// Server names missing from `servers` are skipped.
    pub fn local_zookeeper_server(&self, local_addresses: &BTreeSet<Ipv4Addr>) -> Option<&str> {
        self.storm_yaml
            .zookeeper_servers
            .iter()
            .find(|name| {
                self.servers
                    .get(name.as_str())
                    .is_some_and(|ip| local_addresses.contains(ip))
            })
            .map(String::as_str)
    }

    pub fn ports_for(&self, service: &str) -> &[u16] {
        if service == ZOOKEEPER_SERVICE {
            return &self.zookeeper_ports;
        }
        self.service_ports
            .get(service)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
