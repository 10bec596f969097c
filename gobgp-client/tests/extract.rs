use gobgp_client::api::{Destination, Path, Table};
use gobgp_client::{DecodedRoute, extract_rib};

// The worked example from the daemon's own tooling: a route installed with
//   gobgp global rib add 50.30.20.0/20 origin igp nexthop 60.1.2.3 \
//     community 64250:65535,61166:56797 aspath 52428,170 med 48059 -a ipv4
// comes back with these attribute bytes on its single path.
#[test]
fn rib_snapshot_round_trip() {
    let pattrs: Vec<Vec<u8>> = vec![
        vec![0x40, 0x01, 0x01, 0x00],
        vec![
            0x40, 0x02, 0x0A, 0x02, 0x02, 0x00, 0x00, 0xCC, 0xCC, 0x00, 0x00, 0x00, 0xAA,
        ],
        vec![0x40, 0x03, 0x04, 0x3C, 0x01, 0x02, 0x03],
        vec![0x80, 0x04, 0x04, 0x00, 0x00, 0xBB, 0xBB],
        vec![
            0xC0, 0x08, 0x08, 0xFA, 0xFA, 0xFF, 0xFF, 0xEE, 0xEE, 0xDD, 0xDD,
        ],
    ];
    let table = Table {
        destinations: vec![Destination {
            prefix: "50.30.20.0/20".to_string(),
            paths: vec![Path {
                pattrs,
                best: true,
                ..Default::default()
            }],
        }],
        ..Default::default()
    };

    let routes = extract_rib(&table).unwrap();
    assert_eq!(
        routes,
        vec![DecodedRoute {
            prefix: "50.30.20.0/20".to_string(),
            as_path: Some(vec![52428, 170]),
            next_hop: Some("60.1.2.3".to_string()),
            community: Some(vec!["64250:65535".to_string(), "61166:56797".to_string()]),
            med: Some(48059),
        }]
    );
}
