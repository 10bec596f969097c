use std::fmt;

use nom::IResult;
use nom::Parser;
use nom::multi::count;
use nom::number::complete::{be_u8, be_u32};

use crate::ParseBe;

pub const AS_SET: u8 = 1;
pub const AS_SEQ: u8 = 2;
pub const AS_CONFED_SEQ: u8 = 3;
pub const AS_CONFED_SET: u8 = 4;

#[derive(Debug, PartialEq)]
pub struct AsSegmentHeader {
    pub typ: u8,
    pub length: u8,
}

impl ParseBe<AsSegmentHeader> for AsSegmentHeader {
    fn parse_be(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, typ) = be_u8(input)?;
        let (input, length) = be_u8(input)?;
        Ok((input, Self { typ, length }))
    }
}

/// AS_PATH restricted to what the administrative API hands back for an IPv4
/// unicast route: one segment of 4-byte AS numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsPath {
    pub asn: Vec<u32>,
}

impl ParseBe<AsPath> for AsPath {
    fn parse_be(input: &[u8]) -> IResult<&[u8], AsPath> {
        let (input, header) = AsSegmentHeader::parse_be(input)?;
        let (input, asns) = count(be_u32, header.length as usize).parse(input)?;
        Ok((input, AsPath { asn: asns }))
    }
}

impl fmt::Display for AsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self
            .asn
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{v}")
    }
}
