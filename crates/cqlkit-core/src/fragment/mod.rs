//! Module: fragment
//! Responsibility: textual assembly of single WHERE/UPDATE fragments.
//! Does not own: value serialization or statement assembly.
//! Boundary: every clause builder hands pre-serialized operands here.


use derive_more::Display;
use std::fmt;

///
/// Fragment
///
/// Opaque, fully assembled query fragment.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap text assembled by a custom `FragmentBuilder`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of bind placeholders present in the fragment text.
    /// Placeholders inside quoted text literals are not counted.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        let mut quoted = false;
        let mut count = 0;
        for ch in self.0.chars() {
            match ch {
                '\'' => quoted = !quoted,
                '?' if !quoted => count += 1,
                _ => {}
            }
        }

        count
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub const ALL: [Self; 5] = [Self::Lt, Self::Lte, Self::Gt, Self::Gte, Self::Eq];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// WhereOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WhereOp {
    Compare(CompareOp),
    Contains,
    ContainsKey,
}

impl fmt::Display for WhereOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(op) => f.write_str(op.symbol()),
            Self::Contains => f.write_str("CONTAINS"),
            Self::ContainsKey => f.write_str("CONTAINS KEY"),
        }
    }
}

///
/// UpdateOp
///
/// Assignment shape plus its already-serialized operands.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpdateOp<'a> {
    /// `col = v`
    Assign(&'a str),
    /// `col = col + v`
    Add(&'a str),
    /// `col = col - v`
    Subtract(&'a str),
    /// `col = v + col`
    Prepend(&'a str),
    /// `col[index] = value`
    SetAt { index: &'a str, value: &'a str },
}

impl UpdateOp<'_> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Assign(_) => "assign",
            Self::Add(_) => "add",
            Self::Subtract(_) => "subtract",
            Self::Prepend(_) => "prepend",
            Self::SetAt { .. } => "set_at",
        }
    }
}

///
/// FragmentBuilder
///
/// Assembles fragments from a column name and serialized operands.
/// Operands arrive already escaped; implementations only compose them.
///

pub trait FragmentBuilder {
    fn build_where(&self, lhs: &str, op: WhereOp, operand: &str) -> Fragment;

    fn build_update(&self, column: &str, op: UpdateOp<'_>) -> Fragment;

    fn function_call(&self, name: &str, args: &[&str]) -> Fragment;
}

///
/// CqlFragments
///
/// Default fragment builder used by every column clause builder.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CqlFragments;

impl FragmentBuilder for CqlFragments {
    fn build_where(&self, lhs: &str, op: WhereOp, operand: &str) -> Fragment {
        let text = format!("{lhs} {op} {operand}");
        tracing::trace!(lhs, op = %op, fragment = %text, "built where fragment");

        Fragment(text)
    }

    fn build_update(&self, column: &str, op: UpdateOp<'_>) -> Fragment {
        let text = match op {
            UpdateOp::Assign(value) => format!("{column} = {value}"),
            UpdateOp::Add(value) => format!("{column} = {column} + {value}"),
            UpdateOp::Subtract(value) => format!("{column} = {column} - {value}"),
            UpdateOp::Prepend(value) => format!("{column} = {value} + {column}"),
            UpdateOp::SetAt { index, value } => format!("{column}[{index}] = {value}"),
        };
        tracing::trace!(column, op = op.name(), fragment = %text, "built update fragment");

        Fragment(text)
    }

    fn function_call(&self, name: &str, args: &[&str]) -> Fragment {
        Fragment(format!("{name}({})", args.join(", ")))
    }
}
