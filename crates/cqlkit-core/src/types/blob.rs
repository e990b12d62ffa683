use crate::{
    error::SerializeError,
    value::{CqlType, CqlValue, literal},
};
use derive_more::{Deref, From};

///
/// Blob
///
/// Raw bytes stored as a `blob`. `u8` is not a `CqlValue`, so byte buffers
/// reach the store through this type and never as `Vec<u8>`.
///

#[derive(Clone, Debug, Default, Deref, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
pub struct Blob(Vec<u8>);

impl Blob {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl CqlValue for Blob {
    fn cql_type() -> CqlType {
        CqlType::Blob
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(literal::blob(&self.0))
    }
}

///
/// TESTS
///
