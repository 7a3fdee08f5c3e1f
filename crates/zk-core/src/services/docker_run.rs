use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use crate::models::ClusterConfig;

const PUBLISH_FLAG: &str = "-p";
const EXPOSE_FLAG: &str = "--expose";

/// Container arguments for the Zookeeper `docker run`.
///
/// Every cluster server is mapped with `--add-host`, and the container takes
/// the name of the local Zookeeper server as its hostname. `extra_args` come
/// last since they carry the image name.
pub fn build_container_args(
    config: &ClusterConfig,
    extra_args: &[String],
    local_addresses: &BTreeSet<Ipv4Addr>,
) -> Vec<String> {
    let mut args = Vec::with_capacity(config.servers.len() * 2 + extra_args.len() + 2);
    for (name, ip) in &config.servers {
        args.push("--add-host".to_string());
        args.push(format!("{name}:{ip}"));
    }
    if let Some(hostname) = config.local_zookeeper_server(local_addresses) {
        args.push("-h".to_string());
        args.push(hostname.to_string());
    }
    args.extend(extra_args.iter().cloned());
    args
}

/// `--expose <port> -p <port>:<port>` for every port of every named service.
pub fn build_port_publish_flags(config: &ClusterConfig, service_names: &[&str]) -> Vec<String> {
    service_names
        .iter()
        .flat_map(|service| config.ports_for(service))
        .flat_map(|port| {
            [
                EXPOSE_FLAG.to_string(),
                port.to_string(),
                PUBLISH_FLAG.to_string(),
                format!("{port}:{port}"),
            ]
        })
        .collect()
}

/// Separate `-p` flags from the rest of a port flag list.
///
/// Returns `(remaining, withheld)`; `withheld` keeps the `-p <value>` pairs
/// in their original order.
pub fn split_publish_flags(flags: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut remaining = Vec::new();
    let mut withheld = Vec::new();
    let mut tokens = flags.into_iter();
    while let Some(token) = tokens.next() {
        let joined = token
            .strip_prefix(PUBLISH_FLAG)
            .filter(|v| !v.is_empty() && !v.starts_with('-'))
            .map(str::to_string);
        if token == PUBLISH_FLAG {
            if let Some(value) = tokens.next() {
                withheld.push(token);
                withheld.push(value);
            }
        } else if let Some(value) = joined {
            withheld.push(PUBLISH_FLAG.to_string());
            withheld.push(value);
        } else {
            remaining.push(token);
        }
    }
    (remaining, withheld)
}

/// Render explicit `-p` values as flag pairs.
pub fn publish_flags<'a>(values: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    values
        .into_iter()
        .flat_map(|v| [PUBLISH_FLAG.to_string(), v.clone()])
        .collect()
}
