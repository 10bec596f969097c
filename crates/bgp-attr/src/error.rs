use thiserror::Error;

use crate::AttrType;

#[derive(Error, Debug)]
pub enum AttrError {
    #[error("Failed to parse BGP attribute {attr_type:?}: {source}")]
    AttributeParseError {
        attr_type: AttrType,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Truncated attribute header: got {actual} bytes, expected {expected}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("Declared attribute length {declared} exceeds {remaining} remaining bytes")]
    LengthMismatch { declared: usize, remaining: usize },

    #[error("Incomplete data: need {needed} more bytes")]
    IncompleteData { needed: usize },

    #[error("Nom parsing error: {0}")]
    NomError(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for AttrError {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => {
                let needed_bytes = match needed {
                    nom::Needed::Unknown => 0,
                    nom::Needed::Size(size) => size.get(),
                };
                AttrError::IncompleteData {
                    needed: needed_bytes,
                }
            }
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                AttrError::NomError(format!("{:?}: {:?}", e.code, e.input))
            }
        }
    }
}
