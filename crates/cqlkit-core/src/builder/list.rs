use crate::{
    PLACEHOLDER,
    builder::{elements, update},
    clause::UpdateClause,
    column::ListTyped,
    error::SerializeError,
    fragment::UpdateOp,
    value::CqlValue,
    version::StoreFeature,
};

const COLLECTIONS: Option<StoreFeature> = Some(StoreFeature::Collections);

///
/// ListClauses
///
/// List mutations. Multi-value forms keep the caller's element order in
/// the rendered literal.
///

pub trait ListClauses: ListTyped {
    fn prepend(&self, value: impl Into<Self::Element>) -> Result<UpdateClause, SerializeError> {
        self.prepend_all([value])
    }

    /// `col = [v1, v2] + col`
    fn prepend_all<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = elements::<Self::Element, _>(values).to_cql()?;

        Ok(update(self, UpdateOp::Prepend(&literal), COLLECTIONS))
    }

    fn prepend_bound(&self) -> UpdateClause<(Vec<Self::Element>,)> {
        update(self, UpdateOp::Prepend(PLACEHOLDER), COLLECTIONS)
    }

    fn append(&self, value: impl Into<Self::Element>) -> Result<UpdateClause, SerializeError> {
        self.append_all([value])
    }

    /// `col = col + [v1, v2]`
    fn append_all<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = elements::<Self::Element, _>(values).to_cql()?;

        Ok(update(self, UpdateOp::Add(&literal), COLLECTIONS))
    }

    fn append_bound(&self) -> UpdateClause<(Vec<Self::Element>,)> {
        update(self, UpdateOp::Add(PLACEHOLDER), COLLECTIONS)
    }

    /// Remove every occurrence of `value`.
    fn discard(&self, value: impl Into<Self::Element>) -> Result<UpdateClause, SerializeError> {
        self.discard_all([value])
    }

    /// `col = col - [v1, v2]`
    fn discard_all<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = elements::<Self::Element, _>(values).to_cql()?;

        Ok(update(self, UpdateOp::Subtract(&literal), COLLECTIONS))
    }

    fn discard_bound(&self) -> UpdateClause<(Vec<Self::Element>,)> {
        update(self, UpdateOp::Subtract(PLACEHOLDER), COLLECTIONS)
    }

    /// `col[index] = value`
    fn set_idx(
        &self,
        index: i32,
        value: impl Into<Self::Element>,
    ) -> Result<UpdateClause, SerializeError> {
        let index = index.to_string();
        let value = value.into().to_cql()?;

        Ok(update(
            self,
            UpdateOp::SetAt {
                index: &index,
                value: &value,
            },
            COLLECTIONS,
        ))
    }

    /// `col[index] = ?`
    fn set_idx_bound_value(&self, index: i32) -> UpdateClause<(Self::Element,)> {
        let index = index.to_string();

        update(
            self,
            UpdateOp::SetAt {
                index: &index,
                value: PLACEHOLDER,
            },
            COLLECTIONS,
        )
    }

    /// `col[?] = ?`, index bound first.
    fn set_idx_bound(&self) -> UpdateClause<(i32, Self::Element)> {
        update(
            self,
            UpdateOp::SetAt {
                index: PLACEHOLDER,
                value: PLACEHOLDER,
            },
            COLLECTIONS,
        )
    }

    /// Overwrite the whole list.
    fn set_to<I>(&self, values: I) -> Result<UpdateClause, SerializeError>
    where
        I: IntoIterator,
        I::Item: Into<Self::Element>,
    {
        let literal = elements::<Self::Element, _>(values).to_cql()?;

        Ok(update(self, UpdateOp::Assign(&literal), COLLECTIONS))
    }

    fn set_to_bound(&self) -> UpdateClause<(Vec<Self::Element>,)> {
        update(self, UpdateOp::Assign(PLACEHOLDER), COLLECTIONS)
    }
}

impl<C: ListTyped> ListClauses for C {}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{column::ListColumn, value::CqlType};

    const TAGS: ListColumn<String> = ListColumn::new("tags");
    const SLOTS: ListColumn<u64> = ListColumn::new("slots");

    #[test]
    fn append_and_prepend_keep_input_order() {
        assert_eq!(
            TAGS.append("a").unwrap().fragment().as_str(),
            "tags = tags + ['a']"
        );
        assert_eq!(
            TAGS.append_all(["a", "b"]).unwrap().fragment().as_str(),
            "tags = tags + ['a', 'b']"
        );
        assert_eq!(
            TAGS.prepend_all(["a", "b"]).unwrap().fragment().as_str(),
            "tags = ['a', 'b'] + tags"
        );
        assert_eq!(TAGS.prepend("a").unwrap(), TAGS.prepend_all(["a"]).unwrap());
    }

    #[test]
    fn discard_removes_by_value() {
        let clause = TAGS.discard_all(["x", "y"]).unwrap();

        assert_eq!(clause.fragment().as_str(), "tags = tags - ['x', 'y']");
        assert_eq!(clause.required_feature(), Some(StoreFeature::Collections));
        assert_eq!(
            TAGS.discard("x").unwrap().fragment().as_str(),
            "tags = tags - ['x']"
        );
    }

    #[test]
    fn empty_input_renders_an_empty_literal() {
        let clause = TAGS.append_all(Vec::<String>::new()).unwrap();

        assert_eq!(clause.fragment().as_str(), "tags = tags + []");
    }

    #[test]
    fn index_assignment_forms() {
        assert_eq!(
            TAGS.set_idx(2, "z").unwrap().fragment().as_str(),
            "tags[2] = 'z'"
        );

        let value_only = TAGS.set_idx_bound_value(2);
        assert_eq!(value_only.fragment().as_str(), "tags[2] = ?");
        assert_eq!(value_only.bind_types(), vec![CqlType::Text]);

        let both = TAGS.set_idx_bound();
        assert_eq!(both.fragment().as_str(), "tags[?] = ?");
        assert_eq!(both.bind_types(), vec![CqlType::Int, CqlType::Text]);
        assert_eq!(
            both.bind((1, "q".to_string())).unwrap().values(),
            ["1", "'q'"]
        );
    }

    #[test]
    fn bound_forms_bind_whole_lists() {
        let list_of_text = vec![CqlType::list_of(CqlType::Text)];

        assert_eq!(TAGS.append_bound().fragment().as_str(), "tags = tags + ?");
        assert_eq!(TAGS.append_bound().bind_types(), list_of_text);
        assert_eq!(TAGS.prepend_bound().fragment().as_str(), "tags = ? + tags");
        assert_eq!(TAGS.discard_bound().fragment().as_str(), "tags = tags - ?");
        assert_eq!(TAGS.set_to_bound().fragment().as_str(), "tags = ?");
        assert_eq!(TAGS.set_to_bound().bind_types(), list_of_text);
    }

    #[test]
    fn set_to_overwrites() {
        assert_eq!(
            TAGS.set_to(["a"]).unwrap().fragment().as_str(),
            "tags = ['a']"
        );
    }

    #[test]
    fn serializer_rejection_propagates() {
        assert!(SLOTS.append(u64::MAX).is_err());
        assert!(SLOTS.set_idx(0, u64::MAX).is_err());
        assert!(SLOTS.append_all([1u64, 2]).is_ok());
    }

    #[test]
    fn indexed_lists_remain_mutable() {
        let indexed = TAGS.indexed();

        assert_eq!(
            indexed.append("a").unwrap().fragment().as_str(),
            "tags = tags + ['a']"
        );
    }
}
