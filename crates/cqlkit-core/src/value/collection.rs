//! Bindable set and map values.
//!
//! Neither wrapper asks anything of its elements beyond `CqlValue`, so a
//! `set<double>` or `map<double, _>` column binds the same way as any other.
//! Elements render in the order they were supplied.

use crate::{
    error::SerializeError,
    value::{CqlType, CqlValue, literal},
};
use derive_more::{Deref, From};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::BuildHasher,
};

///
/// CqlSet
///
/// Set value held as a plain element list.
///

#[derive(Clone, Debug, Deref, Eq, From, PartialEq)]
pub struct CqlSet<E>(Vec<E>);

impl<E> CqlSet<E> {
    #[must_use]
    pub const fn new(elements: Vec<E>) -> Self {
        Self(elements)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<E> {
        self.0
    }
}

impl<E, const N: usize> From<[E; N]> for CqlSet<E> {
    fn from(elements: [E; N]) -> Self {
        Self(elements.into())
    }
}

impl<E> From<BTreeSet<E>> for CqlSet<E> {
    fn from(set: BTreeSet<E>) -> Self {
        set.into_iter().collect()
    }
}

impl<E, S: BuildHasher> From<HashSet<E, S>> for CqlSet<E> {
    fn from(set: HashSet<E, S>) -> Self {
        set.into_iter().collect()
    }
}

impl<E> FromIterator<E> for CqlSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E: CqlValue> CqlValue for CqlSet<E> {
    fn cql_type() -> CqlType {
        CqlType::set_of(E::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::set(&self.0)
    }
}

///
/// CqlMap
///
/// Map value held as a plain entry list. Duplicate keys are passed through
/// untouched.
///

#[derive(Clone, Debug, Deref, Eq, From, PartialEq)]
pub struct CqlMap<K, V>(Vec<(K, V)>);

impl<K, V> CqlMap<K, V> {
    #[must_use]
    pub const fn new(entries: Vec<(K, V)>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<(K, V)> {
        self.0
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for CqlMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self(entries.into())
    }
}

impl<K, V> From<BTreeMap<K, V>> for CqlMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V, S: BuildHasher> From<HashMap<K, V, S>> for CqlMap<K, V> {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for CqlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: CqlValue, V: CqlValue> CqlValue for CqlMap<K, V> {
    fn cql_type() -> CqlType {
        CqlType::map_of(K::cql_type(), V::cql_type())
    }

    fn to_cql(&self) -> Result<String, SerializeError> {
        literal::map(self.0.iter().map(|(key, value)| (key, value)))
    }
}
