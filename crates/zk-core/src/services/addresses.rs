use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::error::{LauncherError, Result};

const EC2_PUBLIC_IPV4_URL: &str = "http://169.254.169.254/latest/meta-data/public-ipv4";
const METADATA_TIMEOUT: Duration = Duration::from_secs(2);

/// IPv4 addresses that identify this host.
///
/// Interface addresses are always included. Loopback only counts for
/// single-machine setups. For all-EC2 clusters the instance's public address
/// is looked up as well, since it never appears on an interface.
pub async fn resolve_local_addresses(
    is_localhost_setup: bool,
    all_machines_are_ec2_instances: bool,
) -> Result<BTreeSet<Ipv4Addr>> {
    let interfaces = local_ip_address::list_afinet_netifas()
        .map_err(|e| LauncherError::AddressDiscovery(format!("failed to list interfaces: {e}")))?;
    let mut addresses = collect_ipv4(interfaces.into_iter().map(|(_, ip)| ip), is_localhost_setup);

    if all_machines_are_ec2_instances {
        match fetch_ec2_public_ipv4().await {
            Ok(ip) => {
                addresses.insert(ip);
            }
            Err(e) => tracing::warn!("EC2 public address lookup failed: {e}"),
        }
    }

    tracing::debug!(?addresses, "resolved local addresses");
    Ok(addresses)
}

pub fn collect_ipv4(
    ips: impl IntoIterator<Item = IpAddr>,
    keep_loopback: bool,
) -> BTreeSet<Ipv4Addr> {
    let mut addresses: BTreeSet<Ipv4Addr> = ips
        .into_iter()
        .filter_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .filter(|ip| keep_loopback || !ip.is_loopback())
        .collect();
    if keep_loopback {
        addresses.insert(Ipv4Addr::LOCALHOST);
    }
    addresses
}

async fn fetch_ec2_public_ipv4() -> Result<Ipv4Addr> {
    let client = reqwest::Client::builder()
        .timeout(METADATA_TIMEOUT)
        .build()
        .map_err(|e| LauncherError::AddressDiscovery(e.to_string()))?;
    let body = client
        .get(EC2_PUBLIC_IPV4_URL)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| LauncherError::AddressDiscovery(e.to_string()))?
        .text()
        .await
        .map_err(|e| LauncherError::AddressDiscovery(e.to_string()))?;
    body.trim().parse().map_err(|e| {
        LauncherError::AddressDiscovery(format!("unexpected metadata response {body:?}: {e}"))
    })
}
