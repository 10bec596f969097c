use std::fmt;

use nom::IResult;
use nom::number::complete::be_u32;

use crate::ParseBe;

#[derive(Clone, PartialEq, PartialOrd, Default)]
pub struct Med {
    pub med: u32,
}

impl Med {
    pub fn new(med: u32) -> Self {
        Self { med }
    }
}

impl ParseBe<Med> for Med {
    fn parse_be(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, med) = be_u32(input)?;
        Ok((input, Self { med }))
    }
}

impl fmt::Display for Med {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.med)
    }
}

impl fmt::Debug for Med {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Med: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let value: &[u8] = &[0x00, 0x00, 0xBB, 0xBB];
        let (_, med) = Med::parse_be(value).unwrap();
        assert_eq!(med.med, 48059);
    }

    #[test]
    fn zero_is_a_value() {
        let value: &[u8] = &[0x00, 0x00, 0x00, 0x00];
        let (_, med) = Med::parse_be(value).unwrap();
        assert_eq!(med, Med::new(0));
    }
}
