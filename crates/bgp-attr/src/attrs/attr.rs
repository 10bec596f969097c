use nom::Parser;
use nom::bytes::complete::take;
use nom::number::complete::be_u8;

use crate::{AsPath, AttrError, Community, Med, NexthopAttr, ParseBe};

use super::{AttrFlags, COMMUNITY_FLAGS};

#[repr(u8)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AttrType {
    Origin = 1,
    AsPath = 2,
    NextHop = 3,
    Med = 4,
    LocalPref = 5,
    AtomicAggregate = 6,
    Aggregator = 7,
    Community = 8,
    Unknown(u8),
}

impl From<u8> for AttrType {
    fn from(attr_type: u8) -> Self {
        use AttrType::*;
        match attr_type {
            1 => Origin,
            2 => AsPath,
            3 => NextHop,
            4 => Med,
            5 => LocalPref,
            6 => AtomicAggregate,
            7 => Aggregator,
            8 => Community,
            v => Unknown(v),
        }
    }
}

impl From<AttrType> for u8 {
    fn from(attr_type: AttrType) -> Self {
        use AttrType::*;
        match attr_type {
            Origin => 1,
            AsPath => 2,
            NextHop => 3,
            Med => 4,
            LocalPref => 5,
            AtomicAggregate => 6,
            Aggregator => 7,
            Community => 8,
            Unknown(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrHeader {
    pub flags: AttrFlags,
    pub attr_type: AttrType,
    pub length: u16,
}

impl AttrHeader {
    /// Parse the flags octet, type octet and the 1- or 2-byte length field,
    /// returning the header and the bytes that follow it.
    pub fn parse(input: &[u8]) -> Result<(&[u8], AttrHeader), AttrError> {
        if input.len() < 2 {
            return Err(AttrError::TruncatedHeader {
                expected: 2,
                actual: input.len(),
            });
        }
        let (input, flags_byte) = be_u8(input)?;
        let flags = AttrFlags::from_bits(flags_byte);
        let (input, attr_type_byte) = be_u8(input)?;
        let attr_type: AttrType = attr_type_byte.into();

        // The extended-length flag selects a 2-byte length field.
        let length_size = if flags.extended() { 2usize } else { 1usize };
        if input.len() < length_size {
            return Err(AttrError::TruncatedHeader {
                expected: 2 + length_size,
                actual: 2 + input.len(),
            });
        }
        let (input, length_bytes) = take(length_size).parse(input)?;
        let length = u16::from_be_bytes(if length_bytes.len() == 2 {
            [length_bytes[0], length_bytes[1]]
        } else {
            [0, length_bytes[0]]
        });

        Ok((
            input,
            AttrHeader {
                flags,
                attr_type,
                length,
            },
        ))
    }
}

/// Locate the first attribute of the wanted type and return its value bytes.
///
/// Entries too short to carry the flags and type octets cannot be matched and
/// are skipped. A matched entry whose declared length overruns the available
/// bytes is an error, not an absence. Duplicate attributes of the same type
/// are ignored after the first match.
fn find_attr<'a, B: AsRef<[u8]>>(
    attrs: &'a [B],
    attr_type: AttrType,
    flags_byte: Option<u8>,
) -> Result<Option<&'a [u8]>, AttrError> {
    for raw in attrs {
        let raw = raw.as_ref();
        if raw.len() < 2 || AttrType::from(raw[1]) != attr_type {
            continue;
        }
        if let Some(flags) = flags_byte
            && raw[0] != flags
        {
            continue;
        }
        let (value, header) = AttrHeader::parse(raw)?;
        if value.len() < header.length as usize {
            return Err(AttrError::LengthMismatch {
                declared: header.length as usize,
                remaining: value.len(),
            });
        }
        return Ok(Some(&value[..header.length as usize]));
    }
    Ok(None)
}

fn attr_context(attr_type: AttrType, err: nom::Err<nom::error::Error<&[u8]>>) -> AttrError {
    AttrError::AttributeParseError {
        attr_type,
        source: Box::new(AttrError::from(err)),
    }
}

/// Decode the AS_PATH attribute of a path, if present.
///
/// Only a single AS_SEQUENCE segment of 4-byte AS numbers is understood;
/// 2-byte legacy ASNs and multi-segment paths are not supported.
pub fn decode_as_path<B: AsRef<[u8]>>(attrs: &[B]) -> Result<Option<AsPath>, AttrError> {
    let Some(value) = find_attr(attrs, AttrType::AsPath, None)? else {
        return Ok(None);
    };
    let (_, aspath) = AsPath::parse_be(value).map_err(|e| attr_context(AttrType::AsPath, e))?;
    Ok(Some(aspath))
}

/// Decode the NEXT_HOP attribute of a path, if present.
pub fn decode_next_hop<B: AsRef<[u8]>>(attrs: &[B]) -> Result<Option<NexthopAttr>, AttrError> {
    let Some(value) = find_attr(attrs, AttrType::NextHop, None)? else {
        return Ok(None);
    };
    let (_, nexthop) = NexthopAttr::parse_be(value).map_err(|e| attr_context(AttrType::NextHop, e))?;
    Ok(Some(nexthop))
}

/// Decode the MULTI_EXIT_DISC attribute of a path, if present.
pub fn decode_med<B: AsRef<[u8]>>(attrs: &[B]) -> Result<Option<Med>, AttrError> {
    let Some(value) = find_attr(attrs, AttrType::Med, None)? else {
        return Ok(None);
    };
    let (_, med) = Med::parse_be(value).map_err(|e| attr_context(AttrType::Med, e))?;
    Ok(Some(med))
}

/// Decode the standard COMMUNITY attribute of a path, if present.
///
/// Matched on the full optional|transitive flags octet together with the
/// type octet, as the attribute is emitted on the wire.
pub fn decode_community<B: AsRef<[u8]>>(attrs: &[B]) -> Result<Option<Community>, AttrError> {
    let Some(value) = find_attr(attrs, AttrType::Community, Some(COMMUNITY_FLAGS))? else {
        return Ok(None);
    };
    let (_, community) = Community::parse_be(value).map_err(|e| attr_context(AttrType::Community, e))?;
    Ok(Some(community))
}
