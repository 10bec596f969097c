pub mod api {
    tonic::include_proto!("gobgpapi");
}

pub mod client;
pub use client::*;

pub mod error;
pub use error::*;

pub mod neighbor;
pub use neighbor::*;

pub mod rib;
pub use rib::*;
