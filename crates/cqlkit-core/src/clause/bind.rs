use crate::{
    error::SerializeError,
    value::{CqlType, CqlValue},
};

///
/// BindSlot
///
/// One deferred parameter: the `?` it fills (zero-based, in fragment text
/// order) and the type it expects at bind time.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BindSlot {
    pub position: usize,
    pub ty: CqlType,
}

///
/// BindList
///
/// Ordered, fixed-arity tuple of bind types declared by a clause.
///

pub trait BindList {
    const ARITY: usize;

    fn cql_types() -> Vec<CqlType>;

    /// Serialize every value, in declared order.
    fn to_cql(&self) -> Result<Vec<String>, SerializeError>;
}

impl BindList for () {
    const ARITY: usize = 0;

    fn cql_types() -> Vec<CqlType> {
        Vec::new()
    }

    fn to_cql(&self) -> Result<Vec<String>, SerializeError> {
        Ok(Vec::new())
    }
}

impl<A: CqlValue> BindList for (A,) {
    const ARITY: usize = 1;

    fn cql_types() -> Vec<CqlType> {
        vec![A::cql_type()]
    }

    fn to_cql(&self) -> Result<Vec<String>, SerializeError> {
        Ok(vec![self.0.to_cql()?])
    }
}

impl<A: CqlValue, B: CqlValue> BindList for (A, B) {
    const ARITY: usize = 2;

    fn cql_types() -> Vec<CqlType> {
        vec![A::cql_type(), B::cql_type()]
    }

    fn to_cql(&self) -> Result<Vec<String>, SerializeError> {
        Ok(vec![self.0.to_cql()?, self.1.to_cql()?])
    }
}
