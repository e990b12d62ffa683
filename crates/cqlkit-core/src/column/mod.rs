//! Module: column
//! Responsibility: typed column handles and the capability traits that
//! decide which clause builders a column may reach.
//! Does not own: schema metadata or validation.
//! Boundary: handles are immutable and built once at schema definition.

mod handle;


use crate::{
    fragment::{CqlFragments, FragmentBuilder},
    value::CqlValue,
};
use derive_more::Display;

// re-exports
pub use handle::{
    CounterColumn, Indexed, IndexedKeyedMapColumn, IndexedListColumn, IndexedMapColumn,
    IndexedSetColumn, KeysIndexed, ListColumn, MapColumn, PartitionKeyColumn, SetColumn,
};

///
/// ColumnKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum ColumnKind {
    Counter,
    List,
    Map,
    PartitionKey,
    Set,
}

///
/// Column
///
/// Named slot in a table schema.
///

pub trait Column {
    fn name(&self) -> &'static str;

    fn kind(&self) -> ColumnKind;

    /// Fragment builder every clause on this column is assembled with.
    fn fragments(&self) -> &dyn FragmentBuilder {
        &CqlFragments
    }
}

// ----------------------------------------------------------------------
// Capability traits
// ----------------------------------------------------------------------

/// Column that takes part in the partition key.
pub trait PartitionKeyed: Column {
    type Value: CqlValue;
}

/// Counter column; only accepts signed deltas.
pub trait CounterTyped: Column {}

pub trait ListTyped: Column {
    type Element: CqlValue;
}

pub trait SetTyped: Column {
    type Element: CqlValue;
}

pub trait MapTyped: Column {
    type Key: CqlValue;
    type Value: CqlValue;
}

///
/// Container
///
/// Collection column whose elements a `CONTAINS` test matches against:
/// list and set elements, map values.
///

pub trait Container: Column {
    type Element: CqlValue;
}

/// Collection column carrying a secondary index on its elements.
pub trait IndexedColumn: Column {
    type Element: CqlValue;
}

/// Map column carrying a secondary index on its keys.
pub trait KeysIndexedColumn: Column {
    type Key: CqlValue;
}
