use std::fmt;

use nom::IResult;
use nom::Parser;
use nom::combinator::complete;
use nom::multi::many0;
use nom::number::complete::be_u32;

use crate::ParseBe;

/// Standard communities as 32-bit values, in attribute order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Community(pub Vec<u32>);

impl Community {
    pub fn new() -> Self {
        Community(Vec::<u32>::new())
    }

    pub fn push(&mut self, value: u32) {
        self.0.push(value)
    }

    pub fn contains(&self, val: &u32) -> bool {
        self.0.contains(val)
    }

    /// Communities in `<16-bit>:<16-bit>` notation, in attribute order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|x| com_to_digit_str(*x)).collect()
    }
}

impl ParseBe<Community> for Community {
    /// Value bytes are consumed as whole 4-byte communities. A trailing
    /// fragment is silently dropped, matching how the daemon's own tooling
    /// pairs odd community data.
    fn parse_be(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, coms) = many0(complete(be_u32)).parse(input)?;
        Ok((input, Community(coms)))
    }
}

pub fn com_to_digit_str(com: u32) -> String {
    let hval: u32 = (com & 0xFFFF_0000) >> 16;
    let lval: u32 = com & 0x0000_FFFF;
    format!("{}:{}", hval, lval)
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.to_strings().join(" ");
        write!(f, "{v}")
    }
}
