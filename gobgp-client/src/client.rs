use std::net::Ipv4Addr;

use tonic::Request;
use tonic::transport::Channel;
use tracing::debug;

use crate::api::gobgp_api_client::GobgpApiClient;
use crate::api::{
    AddNeighborRequest, DeleteNeighborRequest, GetNeighborRequest, GetRibRequest, Peer, PeerConf,
    Table,
};
use crate::{ClientError, DecodedRoute, FAMILY_IPV4_UNICAST, NeighborConfig, extract_rib};

pub const DEFAULT_PORT: u16 = 50051;

/// Client for the GoBGP daemon's administrative gRPC endpoint.
pub struct GoBgpClient {
    inner: GobgpApiClient<Channel>,
}

impl GoBgpClient {
    /// Connect to the daemon, e.g. `http://127.0.0.1:50051`.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let endpoint = endpoint.into();
        debug!("connecting to GoBGP at {}", endpoint);
        let inner = GobgpApiClient::connect(endpoint).await?;
        Ok(Self { inner })
    }

    /// Fetch the global IPv4 unicast RIB and decode the supported path
    /// attributes of each destination.
    pub async fn get_rib(&mut self) -> Result<Vec<DecodedRoute>, ClientError> {
        let request = Request::new(GetRibRequest {
            table: Some(Table {
                family: FAMILY_IPV4_UNICAST,
                ..Default::default()
            }),
        });
        let response = self.inner.get_rib(request).await?.into_inner();
        let Some(table) = response.table else {
            return Ok(Vec::new());
        };
        debug!("received {} destinations", table.destinations.len());
        Ok(extract_rib(&table)?)
    }

    /// All configured peers.
    pub async fn neighbors(&mut self) -> Result<Vec<Peer>, ClientError> {
        let request = Request::new(GetNeighborRequest::default());
        let response = self.inner.get_neighbor(request).await?;
        Ok(response.into_inner().peers)
    }

    /// The peer with the given neighbor address.
    pub async fn neighbor(&mut self, address: Ipv4Addr) -> Result<Peer, ClientError> {
        let wanted = address.to_string();
        self.neighbors()
            .await?
            .into_iter()
            .find(|peer| {
                peer.conf
                    .as_ref()
                    .is_some_and(|conf| conf.neighbor_address == wanted)
            })
            .ok_or(ClientError::PeerNotFound(wanted))
    }

    pub async fn add_neighbor(&mut self, config: &NeighborConfig) -> Result<(), ClientError> {
        let request = Request::new(AddNeighborRequest {
            peer: Some(config.to_peer()),
        });
        self.inner.add_neighbor(request).await?;
        Ok(())
    }

    /// Remove the peer with the given neighbor address. The request carries
    /// only the address; the daemon looks the session up itself.
    pub async fn delete_neighbor(&mut self, address: Ipv4Addr) -> Result<(), ClientError> {
        let peer = Peer {
            families: vec![FAMILY_IPV4_UNICAST],
            conf: Some(PeerConf {
                neighbor_address: address.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let request = Request::new(DeleteNeighborRequest { peer: Some(peer) });
        self.inner.delete_neighbor(request).await?;
        Ok(())
    }
}
