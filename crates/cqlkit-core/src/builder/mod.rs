//! Module: builder
//! Responsibility: per-kind clause builders, exposed as extension traits
//! blanket-implemented over the column capability traits.
//! Does not own: fragment text layout or value serialization.
//! Boundary: a builder method exists on a column only when the column's
//! capability allows it; nothing here checks kinds at runtime.

mod contains;
mod counter;
mod list;
mod map;
mod set;
mod token;


// re-exports
pub use contains::{ContainsClauses, KeyContainsClauses};
pub use counter::CounterClauses;
pub use list::ListClauses;
pub use map::MapClauses;
pub use set::SetClauses;
pub use token::TokenClauses;

use crate::{
    clause::{BindList, ClauseBody, FilterCondition, UpdateClause},
    column::Column,
    fragment::{UpdateOp, WhereOp},
    version::StoreFeature,
};

// `column <op> operand`, assembled by the column's own fragment builder.
fn filter<B, C>(
    column: &C,
    op: WhereOp,
    operand: &str,
    feature: Option<StoreFeature>,
) -> FilterCondition<B>
where
    B: BindList,
    C: Column + ?Sized,
{
    let fragment = column.fragments().build_where(column.name(), op, operand);

    FilterCondition::from_body(ClauseBody::sequential::<B>(fragment, feature))
}

fn update<B, C>(column: &C, op: UpdateOp<'_>, feature: Option<StoreFeature>) -> UpdateClause<B>
where
    B: BindList,
    C: Column + ?Sized,
{
    let fragment = column.fragments().build_update(column.name(), op);

    UpdateClause::from_body(ClauseBody::sequential::<B>(fragment, feature))
}

// Declared bind `i` fills placeholder `positions[i]`.
fn update_positioned<B, C>(
    column: &C,
    op: UpdateOp<'_>,
    positions: [usize; 2],
    feature: Option<StoreFeature>,
) -> UpdateClause<B>
where
    B: BindList,
    C: Column + ?Sized,
{
    let fragment = column.fragments().build_update(column.name(), op);

    UpdateClause::from_body(ClauseBody::positioned::<B>(fragment, positions, feature))
}

fn elements<E, I>(values: I) -> Vec<E>
where
    I: IntoIterator,
    I::Item: Into<E>,
{
    values.into_iter().map(Into::into).collect()
}
