use crate::{
    PLACEHOLDER,
    builder::filter,
    clause::FilterCondition,
    column::{IndexedColumn, KeysIndexedColumn},
    error::SerializeError,
    fragment::WhereOp,
    value::CqlValue,
    version::StoreFeature,
};

///
/// ContainsClauses
///
/// `CONTAINS` filters; only reachable on columns indexed on their elements
/// (map values for maps).
///

pub trait ContainsClauses: IndexedColumn {
    fn contains(
        &self,
        element: impl Into<Self::Element>,
    ) -> Result<FilterCondition, SerializeError> {
        let operand = element.into().to_cql()?;

        Ok(filter(
            self,
            WhereOp::Contains,
            &operand,
            Some(StoreFeature::CollectionIndexes),
        ))
    }

    fn contains_bound(&self) -> FilterCondition<(Self::Element,)> {
        filter(
            self,
            WhereOp::Contains,
            PLACEHOLDER,
            Some(StoreFeature::CollectionIndexes),
        )
    }
}

impl<C: IndexedColumn> ContainsClauses for C {}

///
/// KeyContainsClauses
///

pub trait KeyContainsClauses: KeysIndexedColumn {
    fn contains_key(&self, key: impl Into<Self::Key>) -> Result<FilterCondition, SerializeError> {
        let operand = key.into().to_cql()?;

        Ok(filter(
            self,
            WhereOp::ContainsKey,
            &operand,
            Some(StoreFeature::KeysIndexes),
        ))
    }

    fn contains_key_bound(&self) -> FilterCondition<(Self::Key,)> {
        filter(
            self,
            WhereOp::ContainsKey,
            PLACEHOLDER,
            Some(StoreFeature::KeysIndexes),
        )
    }
}

impl<C: KeysIndexedColumn> KeyContainsClauses for C {}
