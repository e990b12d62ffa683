use crate::{
    PLACEHOLDER,
    builder::{elements, update},
    clause::UpdateClause,
    column::SetTyped,
    error::SerializeError,
    fragment::UpdateOp,
    value::{CqlSet, CqlValue},
    version::StoreFeature,
};

const COLLECTIONS: Option<StoreFeature> = Some(StoreFeature::Collections);

///
/// SetClauses
///
/// Set mutations. Parameterized forms always bind a whole `CqlSet`, never
/// a single element.
///

pub trait SetClauses: SetTyped {
    fn add(&self, value: impl Into<Self::Element>) -> Result<UpdateClause, SerializeError> {
        self.add_all([value])
    }

    /// `col = col + {v1, v2}`
    fn add_all<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = CqlSet::new(elements::<Self::Element, _>(values)).to_cql()?;

        Ok(update(self, UpdateOp::Add(&literal), COLLECTIONS))
    }

    fn add_bound(&self) -> UpdateClause<(CqlSet<Self::Element>,)> {
        update(self, UpdateOp::Add(PLACEHOLDER), COLLECTIONS)
    }

    fn remove(&self, value: impl Into<Self::Element>) -> Result<UpdateClause, SerializeError> {
        self.remove_all([value])
    }

    /// `col = col - {v1, v2}`
    fn remove_all<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = CqlSet::new(elements::<Self::Element, _>(values)).to_cql()?;

        Ok(update(self, UpdateOp::Subtract(&literal), COLLECTIONS))
    }

    fn remove_bound(&self) -> UpdateClause<(CqlSet<Self::Element>,)> {
        update(self, UpdateOp::Subtract(PLACEHOLDER), COLLECTIONS)
    }

    fn set_to<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = CqlSet::new(elements::<Self::Element, _>(values)).to_cql()?;

        Ok(update(self, UpdateOp::Assign(&literal), COLLECTIONS))
    }

    fn set_to_bound(&self) -> UpdateClause<(CqlSet<Self::Element>,)> {
        update(self, UpdateOp::Assign(PLACEHOLDER), COLLECTIONS)
    }
}

impl<C: SetTyped> SetClauses for C {}
