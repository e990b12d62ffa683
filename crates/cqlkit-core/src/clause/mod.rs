//! Module: clause
//! Responsibility: typed clause values returned by the column builders.
//! Does not own: fragment text assembly or statement composition.
//! Boundary: the bind tuple type parameter is the only compile-time
//! record of what a parameterized clause still needs.

mod bind;

#[cfg(test)]
mod tests;

use crate::{error::SerializeError, fragment::Fragment, value::CqlType, version::StoreFeature};
use std::{fmt, marker::PhantomData};

// re-exports
pub use bind::{BindList, BindSlot};

///
/// ClauseBody
///
/// Untyped payload shared by filters and updates: the fragment, one slot
/// per declared bind, and the store feature the clause relies on.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClauseBody {
    fragment: Fragment,
    slots: Vec<BindSlot>,
    feature: Option<StoreFeature>,
}

impl ClauseBody {
    /// Binds fill placeholders in declared order.
    pub(crate) fn sequential<B: BindList>(
        fragment: Fragment,
        feature: Option<StoreFeature>,
    ) -> Self {
        let slots = B::cql_types()
            .into_iter()
            .enumerate()
            .map(|(position, ty)| BindSlot { position, ty })
            .collect();

        Self::checked::<B>(fragment, slots, feature)
    }

    /// Declared bind `i` fills placeholder `positions[i]`.
    pub(crate) fn positioned<B: BindList>(
        fragment: Fragment,
        positions: [usize; 2],
        feature: Option<StoreFeature>,
    ) -> Self {
        let slots = B::cql_types()
            .into_iter()
            .zip(positions)
            .map(|(ty, position)| BindSlot { position, ty })
            .collect();

        Self::checked::<B>(fragment, slots, feature)
    }

    fn checked<B: BindList>(
        fragment: Fragment,
        slots: Vec<BindSlot>,
        feature: Option<StoreFeature>,
    ) -> Self {
        debug_assert_eq!(slots.len(), B::ARITY);
        debug_assert_eq!(fragment.placeholder_count(), B::ARITY);

        Self {
            fragment,
            slots,
            feature,
        }
    }

    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Slots in declared bind order.
    #[must_use]
    pub fn bind_slots(&self) -> &[BindSlot] {
        &self.slots
    }

    #[must_use]
    pub fn bind_types(&self) -> Vec<CqlType> {
        self.slots.iter().map(|slot| slot.ty.clone()).collect()
    }

    #[must_use]
    pub const fn is_parameterized(&self) -> bool {
        !self.slots.is_empty()
    }

    #[must_use]
    pub const fn required_feature(&self) -> Option<StoreFeature> {
        self.feature
    }

    // Declared-order values are re-sorted into placeholder order.
    fn bind_serialized(&self, declared: Vec<String>) -> BoundClause {
        let mut placed: Vec<(usize, String)> = self
            .slots
            .iter()
            .map(|slot| slot.position)
            .zip(declared)
            .collect();
        placed.sort_by_key(|(position, _)| *position);

        BoundClause {
            fragment: self.fragment.clone(),
            values: placed.into_iter().map(|(_, value)| value).collect(),
        }
    }
}

///
/// BoundClause
///
/// Fragment paired with serialized bind values in placeholder order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundClause {
    fragment: Fragment,
    values: Vec<String>,
}

impl BoundClause {
    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn into_parts(self) -> (Fragment, Vec<String>) {
        (self.fragment, self.values)
    }
}

// Bind tuples are phantom, so the usual derives would wrongly demand
// `B: Clone + Debug + PartialEq`.
macro_rules! typed_clause {
    ($(#[$meta:meta])* $name:ident => $variant:ident) => {
        $(#[$meta])*
        pub struct $name<B = ()> {
            body: ClauseBody,
            _binds: PhantomData<fn() -> B>,
        }

        impl<B> $name<B> {
            pub(crate) const fn from_body(body: ClauseBody) -> Self {
                Self {
                    body,
                    _binds: PhantomData,
                }
            }

            #[must_use]
            pub const fn body(&self) -> &ClauseBody {
                &self.body
            }

            #[must_use]
            pub fn into_body(self) -> ClauseBody {
                self.body
            }

            #[must_use]
            pub const fn fragment(&self) -> &Fragment {
                self.body.fragment()
            }

            #[must_use]
            pub fn bind_slots(&self) -> &[BindSlot] {
                self.body.bind_slots()
            }

            #[must_use]
            pub fn bind_types(&self) -> Vec<CqlType> {
                self.body.bind_types()
            }

            #[must_use]
            pub const fn is_parameterized(&self) -> bool {
                self.body.is_parameterized()
            }

            #[must_use]
            pub const fn required_feature(&self) -> Option<StoreFeature> {
                self.body.required_feature()
            }
        }

        impl<B: BindList> $name<B> {
            /// Serialize `values` and order them by placeholder position.
            pub fn bind(&self, values: B) -> Result<BoundClause, SerializeError> {
                let declared = values.to_cql()?;

                Ok(self.body.bind_serialized(declared))
            }
        }

        impl<B> Clone for $name<B> {
            fn clone(&self) -> Self {
                Self::from_body(self.body.clone())
            }
        }

        impl<B> fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("fragment", &self.body.fragment)
                    .field("slots", &self.body.slots)
                    .finish()
            }
        }

        impl<B> fmt::Display for $name<B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.body.fragment, f)
            }
        }

        impl<B> PartialEq for $name<B> {
            fn eq(&self, other: &Self) -> bool {
                self.body == other.body
            }
        }

        impl<B> Eq for $name<B> {}

        impl<B> From<$name<B>> for Clause {
            fn from(clause: $name<B>) -> Self {
                Self::$variant(clause.body)
            }
        }
    };
}

typed_clause!(
    /// WHERE predicate; `B` lists the binds still owed.
    FilterCondition => Filter
);

typed_clause!(
    /// UPDATE assignment; `B` lists the binds still owed.
    UpdateClause => Update
);

///
/// Clause
///
/// Type-erased clause for callers that collect filters and updates
/// together.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Clause {
    Filter(ClauseBody),
    Update(ClauseBody),
}

impl Clause {
    #[must_use]
    pub const fn body(&self) -> &ClauseBody {
        match self {
            Self::Filter(body) | Self::Update(body) => body,
        }
    }

    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(self, Self::Filter(_))
    }

    #[must_use]
    pub const fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        self.body().fragment()
    }

    #[must_use]
    pub fn bind_slots(&self) -> &[BindSlot] {
        self.body().bind_slots()
    }

    #[must_use]
    pub const fn required_feature(&self) -> Option<StoreFeature> {
        self.body().required_feature()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.fragment(), f)
    }
}
