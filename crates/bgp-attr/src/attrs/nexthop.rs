use std::fmt;
use std::net::Ipv4Addr;

use nom::IResult;

use crate::ParseBe;

#[derive(Clone, PartialEq, Eq)]
pub struct NexthopAttr {
    pub nexthop: Ipv4Addr,
}

impl ParseBe<NexthopAttr> for NexthopAttr {
    fn parse_be(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, nexthop) = Ipv4Addr::parse_be(input)?;
        Ok((input, Self { nexthop }))
    }
}

impl fmt::Display for NexthopAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nexthop)
    }
}

impl fmt::Debug for NexthopAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nexthop: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let value: &[u8] = &[0x3C, 0x01, 0x02, 0x03];
        let (_, nexthop) = NexthopAttr::parse_be(value).unwrap();
        assert_eq!(nexthop.to_string(), "60.1.2.3");
    }

    #[test]
    fn parse_short() {
        assert!(NexthopAttr::parse_be(&[0x3C, 0x01]).is_err());
    }
}
