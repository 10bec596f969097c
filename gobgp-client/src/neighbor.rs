use std::net::Ipv4Addr;

use crate::api::{EbgpMultihop, Peer, PeerConf, Transport};

/// AFI/SAFI value for IPv4 unicast, the only family this client configures.
pub const FAMILY_IPV4_UNICAST: u32 = 65537;

/// Explicit BGP neighbor configuration for IPv4 sessions.
///
/// Every optional knob has a concrete default.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborConfig {
    /// Local IPv4 address of the peering session.
    pub local_address: Ipv4Addr,
    /// Remote router address of the peering session.
    pub neighbor_address: Ipv4Addr,
    pub local_as: u32,
    pub peer_as: u32,
    /// Source address for outgoing BGP messages. Falls back to
    /// `local_address` when unset.
    pub transport_address: Option<Ipv4Addr>,
    pub ebgp_multihop: bool,
    /// TTL for multihop sessions. 255 by default, unlike the 1 many router
    /// CLIs assume.
    pub ebgp_multihop_ttl: u32,
    /// Router ID override. Falls back to `local_address` when unset. The
    /// v1.25 administrative payload does not carry it; the field is kept so
    /// configurations round-trip through this struct unchanged.
    pub router_id: Option<Ipv4Addr>,
    /// BGP MD5 password.
    pub auth_password: Option<String>,
    /// Free-text neighbor description.
    pub description: Option<String>,
}

impl NeighborConfig {
    pub fn new(
        local_address: Ipv4Addr,
        neighbor_address: Ipv4Addr,
        local_as: u32,
        peer_as: u32,
    ) -> Self {
        Self {
            local_address,
            neighbor_address,
            local_as,
            peer_as,
            transport_address: None,
            ebgp_multihop: true,
            ebgp_multihop_ttl: 255,
            router_id: None,
            auth_password: None,
            description: None,
        }
    }

    pub fn router_id(&self) -> Ipv4Addr {
        self.router_id.unwrap_or(self.local_address)
    }

    pub fn transport_address(&self) -> Ipv4Addr {
        self.transport_address.unwrap_or(self.local_address)
    }

    /// Assemble the administrative API `Peer` message for this neighbor.
    pub fn to_peer(&self) -> Peer {
        let conf = PeerConf {
            auth_password: self.auth_password.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            local_as: self.local_as,
            neighbor_address: self.neighbor_address.to_string(),
            peer_as: self.peer_as,
            local_address: self.local_address.to_string(),
        };
        let transport = Transport {
            local_address: self.transport_address().to_string(),
            ..Default::default()
        };
        let ebgp_multihop = EbgpMultihop {
            enabled: self.ebgp_multihop,
            multihop_ttl: self.ebgp_multihop_ttl,
        };
        Peer {
            families: vec![FAMILY_IPV4_UNICAST],
            conf: Some(conf),
            ebgp_multihop: Some(ebgp_multihop),
            transport: Some(transport),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NeighborConfig {
        NeighborConfig::new(
            "10.0.255.2".parse().unwrap(),
            "10.0.255.3".parse().unwrap(),
            64512,
            65001,
        )
    }

    #[test]
    fn defaults() {
        let config = config();
        assert!(config.ebgp_multihop);
        assert_eq!(config.ebgp_multihop_ttl, 255);
        assert_eq!(config.transport_address(), config.local_address);
        assert_eq!(config.router_id(), config.local_address);
        assert_eq!(config.auth_password, None);
        assert_eq!(config.description, None);
    }

    #[test]
    fn to_peer() {
        let peer = config().to_peer();
        assert_eq!(peer.families, vec![FAMILY_IPV4_UNICAST]);

        let conf = peer.conf.unwrap();
        assert_eq!(conf.local_address, "10.0.255.2");
        assert_eq!(conf.neighbor_address, "10.0.255.3");
        assert_eq!(conf.local_as, 64512);
        assert_eq!(conf.peer_as, 65001);
        assert_eq!(conf.auth_password, "");

        let transport = peer.transport.unwrap();
        assert_eq!(transport.local_address, "10.0.255.2");

        let multihop = peer.ebgp_multihop.unwrap();
        assert!(multihop.enabled);
        assert_eq!(multihop.multihop_ttl, 255);
    }

    #[test]
    fn to_peer_with_overrides() {
        let mut config = config();
        config.transport_address = Some("10.9.9.9".parse().unwrap());
        config.auth_password = Some("s3cret".to_string());
        config.description = Some("upstream".to_string());

        let peer = config.to_peer();
        let conf = peer.conf.unwrap();
        assert_eq!(conf.auth_password, "s3cret");
        assert_eq!(conf.description, "upstream");
        assert_eq!(peer.transport.unwrap().local_address, "10.9.9.9");
    }
}
