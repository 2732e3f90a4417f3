use std::net::IpAddr;

use axum::http::HeaderMap;
use ipnet::IpNet;

/// Address a contact submission is charged to.
///
/// When the peer is one of our proxies, walk `X-Forwarded-For` from the right (the hop our
/// proxy appended) and stop at the first address we don't operate. Entries further left were
/// written by the client and can be forged.
pub fn resolve(headers: &HeaderMap, peer: IpAddr, trusted_proxies: &[IpNet]) -> IpAddr {
    let is_proxy = |ip: &IpAddr| trusted_proxies.iter().any(|net| net.contains(ip));

    if !is_proxy(&peer) {
        return peer;
    }

    let hops = headers
        .get_all("x-forwarded-for")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .collect::<Vec<_>>();

    for hop in hops.iter().rev() {
        match hop.parse::<IpAddr>() {
            Ok(ip) if is_proxy(&ip) => continue,
            Ok(ip) => return ip,
            // An unparseable hop means the chain can't be trusted past this point
            Err(_) => break,
        }
    }

    peer
}
