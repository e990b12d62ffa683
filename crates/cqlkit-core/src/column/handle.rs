use crate::{
    column::{
        Column, ColumnKind, Container, CounterTyped, IndexedColumn, KeysIndexedColumn, ListTyped,
        MapTyped, PartitionKeyed, SetTyped,
    },
    fragment::FragmentBuilder,
    value::CqlValue,
};
use std::{fmt, marker::PhantomData};

// Handles only carry type markers, so Clone/Copy/Debug must not demand
// anything of the marker types.
macro_rules! column_handle {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+> => $kind:ident) => {
        $(#[$meta])*
        pub struct $name<$($param),+> {
            name: &'static str,
            _marker: PhantomData<fn() -> ($($param,)+)>,
        }

        impl<$($param),+> $name<$($param),+> {
            #[must_use]
            pub const fn new(name: &'static str) -> Self {
                Self {
                    name,
                    _marker: PhantomData,
                }
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("name", &self.name)
                    .finish()
            }
        }

        impl<$($param),+> Column for $name<$($param),+> {
            fn name(&self) -> &'static str {
                self.name
            }

            fn kind(&self) -> ColumnKind {
                ColumnKind::$kind
            }
        }
    };
}

column_handle!(
    /// Partition key column holding values of type `T`.
    PartitionKeyColumn<T> => PartitionKey
);

column_handle!(
    /// List column with elements of type `E`.
    ListColumn<E> => List
);

column_handle!(
    /// Set column with elements of type `E`.
    SetColumn<E> => Set
);

column_handle!(
    /// Map column from `K` to `V`.
    MapColumn<K, V> => Map
);

///
/// CounterColumn
///

#[derive(Clone, Copy, Debug)]
pub struct CounterColumn {
    name: &'static str,
}

impl CounterColumn {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Column for CounterColumn {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> ColumnKind {
        ColumnKind::Counter
    }
}

impl CounterTyped for CounterColumn {}

impl<T: CqlValue> PartitionKeyed for PartitionKeyColumn<T> {
    type Value = T;
}

impl<E: CqlValue> ListColumn<E> {
    #[must_use]
    pub const fn indexed(self) -> Indexed<Self> {
        Indexed(self)
    }
}

impl<E: CqlValue> ListTyped for ListColumn<E> {
    type Element = E;
}

impl<E: CqlValue> Container for ListColumn<E> {
    type Element = E;
}

impl<E: CqlValue> SetColumn<E> {
    #[must_use]
    pub const fn indexed(self) -> Indexed<Self> {
        Indexed(self)
    }
}

impl<E: CqlValue> SetTyped for SetColumn<E> {
    type Element = E;
}

impl<E: CqlValue> Container for SetColumn<E> {
    type Element = E;
}

impl<K: CqlValue, V: CqlValue> MapColumn<K, V> {
    /// Secondary index on the map's values.
    #[must_use]
    pub const fn indexed(self) -> Indexed<Self> {
        Indexed(self)
    }

    /// Secondary index on the map's keys.
    #[must_use]
    pub const fn keys_indexed(self) -> KeysIndexed<Self> {
        KeysIndexed(self)
    }
}

impl<K: CqlValue, V: CqlValue> MapTyped for MapColumn<K, V> {
    type Key = K;
    type Value = V;
}

impl<K: CqlValue, V: CqlValue> Container for MapColumn<K, V> {
    type Element = V;
}

///
/// Indexed
///
/// Collection column with a secondary index on its elements (map values
/// for maps). Forwards every capability of the wrapped column.
///

#[derive(Clone, Copy, Debug)]
pub struct Indexed<C>(C);

impl<C> Indexed<C> {
    #[must_use]
    pub const fn new(column: C) -> Self {
        Self(column)
    }

    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.0
    }
}

impl<C: Column> Column for Indexed<C> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn kind(&self) -> ColumnKind {
        self.0.kind()
    }

    fn fragments(&self) -> &dyn FragmentBuilder {
        self.0.fragments()
    }
}

impl<C: Container> IndexedColumn for Indexed<C> {
    type Element = C::Element;
}

impl<C: Container> Container for Indexed<C> {
    type Element = C::Element;
}

impl<C: ListTyped> ListTyped for Indexed<C> {
    type Element = C::Element;
}

impl<C: SetTyped> SetTyped for Indexed<C> {
    type Element = C::Element;
}

impl<C: MapTyped> MapTyped for Indexed<C> {
    type Key = C::Key;
    type Value = C::Value;
}

///
/// KeysIndexed
///
/// Map column with a secondary index on its keys. Only key containment
/// is searchable.
///

#[derive(Clone, Copy, Debug)]
pub struct KeysIndexed<C>(C);

impl<C> KeysIndexed<C> {
    #[must_use]
    pub const fn new(column: C) -> Self {
        Self(column)
    }

    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.0
    }
}

impl<C: Column> Column for KeysIndexed<C> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn kind(&self) -> ColumnKind {
        self.0.kind()
    }

    fn fragments(&self) -> &dyn FragmentBuilder {
        self.0.fragments()
    }
}

impl<C: MapTyped> KeysIndexedColumn for KeysIndexed<C> {
    type Key = C::Key;
}

impl<C: MapTyped> MapTyped for KeysIndexed<C> {
    type Key = C::Key;
    type Value = C::Value;
}

pub type IndexedListColumn<E> = Indexed<ListColumn<E>>;
pub type IndexedSetColumn<E> = Indexed<SetColumn<E>>;
pub type IndexedMapColumn<K, V> = Indexed<MapColumn<K, V>>;
pub type IndexedKeyedMapColumn<K, V> = KeysIndexed<MapColumn<K, V>>;
