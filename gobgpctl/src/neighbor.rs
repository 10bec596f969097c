use std::fmt::Write;
use std::net::Ipv4Addr;

use anyhow::Result;
use clap::{Args, Subcommand};

use gobgp_client::{GoBgpClient, NeighborConfig};

#[derive(Subcommand)]
pub enum NeighborCommands {
    /// List configured BGP peers
    List,
    /// Configure a new BGP peer
    Add(AddArgs),
    /// Remove a BGP peer
    Del {
        #[arg(help = "Neighbor address of the peer to remove")]
        address: Ipv4Addr,
    },
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long, help = "Local IPv4 address for the session")]
    pub local_address: Ipv4Addr,

    #[arg(long, help = "Remote router IPv4 address")]
    pub neighbor_address: Ipv4Addr,

    #[arg(long, help = "Local autonomous system number")]
    pub local_as: u32,

    #[arg(long, help = "Remote autonomous system number")]
    pub peer_as: u32,

    #[arg(long, help = "Source address for outgoing BGP messages")]
    pub transport_address: Option<Ipv4Addr>,

    #[arg(long, help = "Disable eBGP multihop")]
    pub no_multihop: bool,

    #[arg(long, help = "TTL for multihop sessions", default_value_t = 255)]
    pub multihop_ttl: u32,

    #[arg(long, help = "BGP MD5 password")]
    pub auth_password: Option<String>,

    #[arg(long, help = "Neighbor description")]
    pub description: Option<String>,
}

impl AddArgs {
    fn to_config(&self) -> NeighborConfig {
        let mut config = NeighborConfig::new(
            self.local_address,
            self.neighbor_address,
            self.local_as,
            self.peer_as,
        );
        config.transport_address = self.transport_address;
        config.ebgp_multihop = !self.no_multihop;
        config.ebgp_multihop_ttl = self.multihop_ttl;
        config.auth_password = self.auth_password.clone();
        config.description = self.description.clone();
        config
    }
}

pub async fn run(endpoint: String, command: NeighborCommands) -> Result<()> {
    let mut client = GoBgpClient::connect(endpoint).await?;

    match command {
        NeighborCommands::List => list(&mut client).await,
        NeighborCommands::Add(args) => {
            client.add_neighbor(&args.to_config()).await?;
            println!("Neighbor {} added", args.neighbor_address);
            Ok(())
        }
        NeighborCommands::Del { address } => {
            client.delete_neighbor(address).await?;
            println!("Neighbor {} removed", address);
            Ok(())
        }
    }
}

async fn list(client: &mut GoBgpClient) -> Result<()> {
    let peers = client.neighbors().await?;
    if peers.is_empty() {
        println!("No neighbor has been configured");
        return Ok(());
    }

    let mut buf = String::new();
    writeln!(buf, "{:16} {:11} {:12} {}", "Neighbor", "AS", "State", "Description").unwrap();
    for peer in peers.iter() {
        let conf = peer.conf.clone().unwrap_or_default();
        let state = peer
            .info
            .as_ref()
            .map(|info| info.bgp_state.clone())
            .unwrap_or_default();
        writeln!(
            buf,
            "{:16} {:11} {:12} {}",
            conf.neighbor_address, conf.peer_as, state, conf.description
        )
        .unwrap();
    }
    print!("{}", buf);

    Ok(())
}
