mod collection;
pub(crate) mod literal;


use crate::error::SerializeError;
use chrono::{DateTime, Utc};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt,
    hash::BuildHasher,
};
use uuid::Uuid;

// re-exports
pub use collection::{CqlMap, CqlSet};

///
/// CqlType
///
/// Declared store type of a column or bind slot.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum CqlType {
    BigInt,
    Blob,
    Boolean,
    Double,
    Float,
    Int,
    List(Box<Self>),
    Map(Box<Self>, Box<Self>),
    Set(Box<Self>),
    SmallInt,
    Text,
    Timestamp,
    TinyInt,
    Uuid,
}

impl CqlType {
    #[must_use]
    pub fn list_of(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    #[must_use]
    pub fn set_of(element: Self) -> Self {
        Self::Set(Box::new(element))
    }

    #[must_use]
    pub fn map_of(key: Self, value: Self) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(..) | Self::Set(_))
    }
}

impl fmt::Display for CqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BigInt => f.write_str("bigint"),
            Self::Blob => f.write_str("blob"),
            Self::Boolean => f.write_str("boolean"),
            Self::Double => f.write_str("double"),
            Self::Float => f.write_str("float"),
            Self::Int => f.write_str("int"),
            Self::List(element) => write!(f, "list<{element}>"),
            Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
            Self::Set(element) => write!(f, "set<{element}>"),
            Self::SmallInt => f.write_str("smallint"),
            Self::Text => f.write_str("text"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::TinyInt => f.write_str("tinyint"),
            Self::Uuid => f.write_str("uuid"),
        }
    }
}

///
/// CqlValue
///
/// Serializer capability for one Rust type: its declared store type and its
/// rendering in the store's textual literal syntax.
///

pub trait CqlValue {
    fn cql_type() -> CqlType;

    fn to_cql(&self) -> Result<String, SerializeError>;
}

// ----------------------------------------------------------------------
// Scalars
// ----------------------------------------------------------------------

macro_rules! impl_integer {
    ($($ty:ty => $cql:ident),* $(,)?) => {
        $(
            impl CqlValue for $ty {
                fn cql_type() -> CqlType {
                    CqlType::$cql
                }

                fn to_cql(&self) -> Result<String, SerializeError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_integer!(
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    u32 => BigInt,
);

impl CqlValue for u64 {
    fn cql_type() -> CqlType {
        CqlType::BigInt
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        i64::try_from(*self)
            .map(|v| v.to_string())
            .map_err(|_| SerializeError::out_of_range(self, CqlType::BigInt))
    }
}

impl CqlValue for bool {
    fn cql_type() -> CqlType {
        CqlType::Boolean
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(if *self { "true" } else { "false" }.to_string())
    }
}

impl CqlValue for f32 {
    fn cql_type() -> CqlType {
        CqlType::Float
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(literal::float(*self))
    }
}

impl CqlValue for f64 {
    fn cql_type() -> CqlType {
        CqlType::Double
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(literal::double(*self))
    }
}

impl CqlValue for String {
    fn cql_type() -> CqlType {
        CqlType::Text
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(literal::text(self))
    }
}

impl CqlValue for &str {
    fn cql_type() -> CqlType {
        CqlType::Text
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(literal::text(self))
    }
}

impl CqlValue for Uuid {
    fn cql_type() -> CqlType {
        CqlType::Uuid
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(self.hyphenated().to_string())
    }
}

// timestamps travel as epoch milliseconds
impl CqlValue for DateTime<Utc> {
    fn cql_type() -> CqlType {
        CqlType::Timestamp
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        Ok(self.timestamp_millis().to_string())
    }
}

// ----------------------------------------------------------------------
// Collections
// ----------------------------------------------------------------------

impl<T: CqlValue> CqlValue for Vec<T> {
    fn cql_type() -> CqlType {
        CqlType::list_of(T::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::list(self)
    }
}

impl<T: CqlValue> CqlValue for BTreeSet<T> {
    fn cql_type() -> CqlType {
        CqlType::set_of(T::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::set(self)
    }
}

impl<T: CqlValue, S: BuildHasher> CqlValue for HashSet<T, S> {
    fn cql_type() -> CqlType {
        CqlType::set_of(T::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::set(self)
    }
}

impl<K: CqlValue, V: CqlValue> CqlValue for BTreeMap<K, V> {
    fn cql_type() -> CqlType {
        CqlType::map_of(K::cql_type(), V::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::map(self)
    }
}

impl<K: CqlValue, V: CqlValue, S: BuildHasher> CqlValue for HashMap<K, V, S> {
    fn cql_type() -> CqlType {
        CqlType::map_of(K::cql_type(), V::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::map(self)
    }
}
