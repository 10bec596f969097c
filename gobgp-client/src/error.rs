use thiserror::Error;

use crate::RibError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("RPC error: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("BGP peer not found: {0}")]
    PeerNotFound(String),

    #[error(transparent)]
    Rib(#[from] RibError),
}
