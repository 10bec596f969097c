use bgp_attr::*;
use hex_literal::hex;

// Attributes as the GoBGP administrative API returns them for a route
// installed with:
//   gobgp global rib add 50.30.20.0/20 origin igp nexthop 60.1.2.3 \
//     community 64250:65535,61166:56797 aspath 52428,170 med 48059 -a ipv4
fn sample_attrs() -> Vec<Vec<u8>> {
    vec![
        hex!("40 01 01 00").to_vec(),
        hex!("40 02 0a 02 02 00 00 cc cc 00 00 00 aa").to_vec(),
        hex!("40 03 04 3c 01 02 03").to_vec(),
        hex!("80 04 04 00 00 bb bb").to_vec(),
        hex!("c0 08 08 fa fa ff ff ee ee dd dd").to_vec(),
    ]
}

#[test]
fn decode_as_path_sample() {
    let aspath = decode_as_path(&sample_attrs()).unwrap().unwrap();
    assert_eq!(aspath.asn, vec![52428, 170]);
}

#[test]
fn decode_next_hop_sample() {
    let nexthop = decode_next_hop(&sample_attrs()).unwrap().unwrap();
    assert_eq!(nexthop.to_string(), "60.1.2.3");
}

#[test]
fn decode_med_sample() {
    let med = decode_med(&sample_attrs()).unwrap().unwrap();
    assert_eq!(med.med, 48059);
}

#[test]
fn decode_community_sample() {
    let com = decode_community(&sample_attrs()).unwrap().unwrap();
    assert_eq!(com.to_strings(), vec!["64250:65535", "61166:56797"]);
}

#[test]
fn absent_attributes_decode_to_none() {
    // ORIGIN only: none of the four decoded kinds is present.
    let attrs = vec![hex!("40 01 01 00").to_vec()];
    assert!(decode_as_path(&attrs).unwrap().is_none());
    assert!(decode_next_hop(&attrs).unwrap().is_none());
    assert!(decode_med(&attrs).unwrap().is_none());
    assert!(decode_community(&attrs).unwrap().is_none());
}

#[test]
fn empty_attr_list_decodes_to_none() {
    let attrs: Vec<Vec<u8>> = Vec::new();
    assert!(decode_as_path(&attrs).unwrap().is_none());
    assert!(decode_next_hop(&attrs).unwrap().is_none());
    assert!(decode_med(&attrs).unwrap().is_none());
    assert!(decode_community(&attrs).unwrap().is_none());
}

#[test]
fn as_path_length_counts_asns() {
    for n in 1u8..=6 {
        let mut attr = vec![0x40, 0x02, 2 + 4 * n, AS_SEQ, n];
        for i in 0..n {
            attr.extend_from_slice(&u32::from(i).to_be_bytes());
        }
        let aspath = decode_as_path(&[attr]).unwrap().unwrap();
        assert_eq!(aspath.asn.len(), n as usize);
        assert_eq!(aspath.asn, (0..u32::from(n)).collect::<Vec<u32>>());
    }
}

#[test]
fn extended_length_as_path() {
    // Same AS_PATH with the extended-length flag and a 2-byte length field.
    let attr = hex!("50 02 00 0a 02 02 00 00 cc cc 00 00 00 aa").to_vec();
    let aspath = decode_as_path(&[attr]).unwrap().unwrap();
    assert_eq!(aspath.asn, vec![52428, 170]);
}

#[test]
fn community_with_odd_field_count() {
    // Length 0x0a: two communities and an unpaired trailing 16-bit field,
    // which is dropped rather than decoded.
    let attr = hex!("c0 08 0a fa fa ff ff ee ee dd dd 11 11").to_vec();
    let com = decode_community(&[attr]).unwrap().unwrap();
    assert_eq!(com.to_strings(), vec!["64250:65535", "61166:56797"]);
}

#[test]
fn med_overrunning_declared_length_is_an_error() {
    let attr = hex!("80 04 08 00 00 bb bb").to_vec();
    let err = decode_med(&[attr]).unwrap_err();
    assert!(matches!(err, AttrError::LengthMismatch { .. }));
}

#[test]
fn truncated_header_after_match_is_an_error() {
    // Matched on type MED, but the length octet is missing.
    let attr = vec![0x80, 0x04];
    let err = decode_med(&[attr]).unwrap_err();
    assert!(matches!(err, AttrError::TruncatedHeader { .. }));
}

#[test]
fn duplicate_attribute_uses_first() {
    let attrs = vec![
        hex!("80 04 04 00 00 bb bb").to_vec(),
        hex!("80 04 04 00 00 00 01").to_vec(),
    ];
    let med = decode_med(&attrs).unwrap().unwrap();
    assert_eq!(med.med, 48059);
}
