use crate::{
    PLACEHOLDER, TOKEN_FUNCTION,
    clause::{BindList, ClauseBody, FilterCondition},
    column::{Column, PartitionKeyed},
    error::SerializeError,
    fragment::{CompareOp, WhereOp},
    value::CqlValue,
};

///
/// TokenClauses
///
/// Partition token comparisons: `token(col) <op> token(value)`.
/// The operand is always the column's own key type.
///

pub trait TokenClauses: PartitionKeyed {
    fn token(
        &self,
        op: CompareOp,
        value: impl Into<Self::Value>,
    ) -> Result<FilterCondition, SerializeError> {
        let operand = value.into().to_cql()?;

        Ok(token_filter(self, op, &operand))
    }

    fn token_lt(&self, value: impl Into<Self::Value>) -> Result<FilterCondition, SerializeError> {
        self.token(CompareOp::Lt, value)
    }

    fn token_lte(&self, value: impl Into<Self::Value>) -> Result<FilterCondition, SerializeError> {
        self.token(CompareOp::Lte, value)
    }

    fn token_gt(&self, value: impl Into<Self::Value>) -> Result<FilterCondition, SerializeError> {
        self.token(CompareOp::Gt, value)
    }

    fn token_gte(&self, value: impl Into<Self::Value>) -> Result<FilterCondition, SerializeError> {
        self.token(CompareOp::Gte, value)
    }

    fn token_eq(&self, value: impl Into<Self::Value>) -> Result<FilterCondition, SerializeError> {
        self.token(CompareOp::Eq, value)
    }

    /// `token(col) <op> token(?)`, binding one key.
    fn token_bound(&self, op: CompareOp) -> FilterCondition<(Self::Value,)> {
        token_filter(self, op, PLACEHOLDER)
    }
}

impl<C: PartitionKeyed> TokenClauses for C {}

fn token_filter<B, C>(column: &C, op: CompareOp, operand: &str) -> FilterCondition<B>
where
    B: BindList,
    C: Column + ?Sized,
{
    let fragments = column.fragments();
    let lhs = fragments.function_call(TOKEN_FUNCTION, &[column.name()]);
    let rhs = fragments.function_call(TOKEN_FUNCTION, &[operand]);
    let fragment = fragments.build_where(lhs.as_str(), WhereOp::Compare(op), rhs.as_str());

    FilterCondition::from_body(ClauseBody::sequential::<B>(fragment, None))
}

///
/// TESTS
///
