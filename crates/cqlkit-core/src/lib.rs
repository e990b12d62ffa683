//! Core runtime for cqlkit: typed column handles, value serialization, and
//! the WHERE/UPDATE clause builders exposed through the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod builder;
pub mod clause;
pub mod column;
pub mod config;
pub mod error;
pub mod fragment;
pub mod types;
pub mod value;
pub mod version;

///
/// CONSTANTS
///

/// Name of the store function that maps a partition key to its token.
pub const TOKEN_FUNCTION: &str = "token";

/// Bind placeholder used in parameterized fragments.
pub const PLACEHOLDER: &str = "?";

///
/// Prelude
///
/// Column vocabulary and builder traits only.
/// Errors and configuration are reached through their modules.
///

pub mod prelude {
    pub use crate::{
        builder::{
            ContainsClauses as _, CounterClauses as _, KeyContainsClauses as _, ListClauses as _,
            MapClauses as _, SetClauses as _, TokenClauses as _,
        },
        clause::{Clause, FilterCondition, UpdateClause},
        column::{
            CounterColumn, Indexed, IndexedKeyedMapColumn, IndexedListColumn, IndexedMapColumn,
            IndexedSetColumn, KeysIndexed, ListColumn, MapColumn, PartitionKeyColumn, SetColumn,
        },
        fragment::CompareOp,
        types::{Blob, TimeId},
        value::{CqlMap, CqlSet, CqlType, CqlValue},
    };
}
