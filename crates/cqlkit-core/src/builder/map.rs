use crate::{
    PLACEHOLDER,
    builder::{elements, update, update_positioned},
    clause::UpdateClause,
    column::MapTyped,
    error::SerializeError,
    fragment::UpdateOp,
    value::{CqlMap, CqlSet, CqlValue},
    version::StoreFeature,
};

const COLLECTIONS: Option<StoreFeature> = Some(StoreFeature::Collections);

///
/// MapClauses
///
/// Map mutations by key or by entry batch.
///

pub trait MapClauses: MapTyped {
    /// `col[key] = value`
    fn set(
        &self,
        key: impl Into<Self::Key>,
        value: impl Into<Self::Value>,
    ) -> Result<UpdateClause, SerializeError> {
        let key = key.into().to_cql()?;
        let value = value.into().to_cql()?;

        Ok(update(
            self,
            UpdateOp::SetAt {
                index: &key,
                value: &value,
            },
            COLLECTIONS,
        ))
    }

    /// `col[?] = ?`
    ///
    /// Binds are declared value first, then key. The key still fills the
    /// first placeholder; `bind` reorders accordingly.
    fn set_bound(&self) -> UpdateClause<(Self::Value, Self::Key)> {
        update_positioned(
            self,
            UpdateOp::SetAt {
                index: PLACEHOLDER,
                value: PLACEHOLDER,
            },
            [1, 0],
            COLLECTIONS,
        )
    }

    fn put<K, V>(&self, entry: (K, V)) -> Result<UpdateClause, SerializeError>
    where
        K: Into<Self::Key>,
        V: Into<Self::Value>,
    {
        self.put_all([entry])
    }

    /// `col = col + {k1: v1, k2: v2}`
    fn put_all<I, K, V>(&self, entries: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self::Key>,
        V: Into<Self::Value>,
    {
        let literal = entries_literal::<Self, _, _, _>(entries)?;

        Ok(update(self, UpdateOp::Add(&literal), COLLECTIONS))
    }

    fn put_bound(&self) -> UpdateClause<(CqlMap<Self::Key, Self::Value>,)> {
        update(self, UpdateOp::Add(PLACEHOLDER), COLLECTIONS)
    }

    /// `col = col - {k1, k2}`
    fn remove_keys<I>(&self, keys: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Key>,
    {
        let literal = CqlSet::new(elements::<Self::Key, _>(keys)).to_cql()?;

        Ok(update(self, UpdateOp::Subtract(&literal), COLLECTIONS))
    }

    fn remove_keys_bound(&self) -> UpdateClause<(CqlSet<Self::Key>,)> {
        update(self, UpdateOp::Subtract(PLACEHOLDER), COLLECTIONS)
    }

    fn set_to<I, K, V>(&self, entries: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self::Key>,
        V: Into<Self::Value>,
    {
        let literal = entries_literal::<Self, _, _, _>(entries)?;

        Ok(update(self, UpdateOp::Assign(&literal), COLLECTIONS))
    }

    fn set_to_bound(&self) -> UpdateClause<(CqlMap<Self::Key, Self::Value>,)> {
        update(self, UpdateOp::Assign(PLACEHOLDER), COLLECTIONS)
    }
}

impl<C: MapTyped> MapClauses for C {}

// Entries render in input order.
fn entries_literal<C, I, K, V>(entries: I) -> Result<String, SerializeError>
where
    C: MapTyped + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<C::Key>,
    V: Into<C::Value>,
{
    let entries: CqlMap<C::Key, C::Value> = entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();

    entries.to_cql()
}
