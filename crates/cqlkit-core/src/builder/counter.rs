use crate::{
    PLACEHOLDER, builder::update, clause::UpdateClause, column::CounterTyped, fragment::UpdateOp,
    version::StoreFeature,
};

const COUNTERS: Option<StoreFeature> = Some(StoreFeature::Counters);

///
/// CounterClauses
///
/// Signed delta updates on counter columns. The `plus_eq` / `minus_eq`
/// aliases produce exactly the same clauses as `increment` / `decrement`.
///

pub trait CounterClauses: CounterTyped {
    /// `col = col + delta`
    fn increment(&self, delta: impl Into<i64>) -> UpdateClause {
        let delta = delta.into().to_string();

        update(self, UpdateOp::Add(&delta), COUNTERS)
    }

    /// `col = col - delta`
    fn decrement(&self, delta: impl Into<i64>) -> UpdateClause {
        let delta = delta.into().to_string();

        update(self, UpdateOp::Subtract(&delta), COUNTERS)
    }

    fn plus_eq(&self, delta: impl Into<i64>) -> UpdateClause {
        self.increment(delta)
    }

    fn minus_eq(&self, delta: impl Into<i64>) -> UpdateClause {
        self.decrement(delta)
    }

    fn increment_bound(&self) -> UpdateClause<(i64,)> {
        update(self, UpdateOp::Add(PLACEHOLDER), COUNTERS)
    }

    fn decrement_bound(&self) -> UpdateClause<(i64,)> {
        update(self, UpdateOp::Subtract(PLACEHOLDER), COUNTERS)
    }

    fn plus_eq_bound(&self) -> UpdateClause<(i64,)> {
        self.increment_bound()
    }

    fn minus_eq_bound(&self) -> UpdateClause<(i64,)> {
        self.decrement_bound()
    }
}

impl<C: CounterTyped> CounterClauses for C {}

///
/// TESTS
///
