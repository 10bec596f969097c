use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use bgp_attr::{AttrError, decode_as_path, decode_community, decode_med, decode_next_hop};

use crate::api::{Destination, Table};

#[derive(Error, Debug)]
pub enum RibError {
    #[error("destination {prefix} carries no path")]
    EmptyPathList { prefix: String },
}

/// One RIB entry with its interesting path attributes decoded.
///
/// An absent attribute stays `None`; it is never folded into a zero or an
/// empty value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DecodedRoute {
    pub prefix: String,
    pub as_path: Option<Vec<u32>>,
    pub next_hop: Option<String>,
    pub community: Option<Vec<String>>,
    pub med: Option<u32>,
}

// A malformed attribute downgrades to absent for that one attribute. The
// destination still yields a route from whatever else decoded cleanly.
fn lenient<T>(prefix: &str, kind: &str, result: Result<Option<T>, AttrError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!("{}: dropping {} attribute: {}", prefix, kind, err);
            None
        }
    }
}

/// Decode the first path of one destination into a [`DecodedRoute`].
///
/// Only `paths[0]` is consulted; no best-path selection happens here. A
/// destination with no path at all is structurally invalid and reported as
/// [`RibError::EmptyPathList`], distinct from any absent attribute.
pub fn extract_route(destination: &Destination) -> Result<DecodedRoute, RibError> {
    let Some(path) = destination.paths.first() else {
        return Err(RibError::EmptyPathList {
            prefix: destination.prefix.clone(),
        });
    };
    let attrs = &path.pattrs;
    let prefix = destination.prefix.as_str();

    let as_path = lenient(prefix, "AS_PATH", decode_as_path(attrs)).map(|v| v.asn);
    let next_hop =
        lenient(prefix, "NEXT_HOP", decode_next_hop(attrs)).map(|v| v.nexthop.to_string());
    let med = lenient(prefix, "MED", decode_med(attrs)).map(|v| v.med);
    let community = lenient(prefix, "COMMUNITY", decode_community(attrs)).map(|v| v.to_strings());

    Ok(DecodedRoute {
        prefix: destination.prefix.clone(),
        as_path,
        next_hop,
        community,
        med,
    })
}

/// Decode every destination of a RIB table, one route per destination, in
/// table order. A destination with an empty path list aborts the extraction;
/// it indicates a broken response rather than a degraded attribute.
pub fn extract_rib(table: &Table) -> Result<Vec<DecodedRoute>, RibError> {
    table.destinations.iter().map(extract_route).collect()
}
