//! Filter conditions.
//!
//! The [`Op`] enum names every condition a filter can carry. The wire name of
//! each condition is the suffix used in query parameters
//! (`totalAmount.greaterThanOrEqual=50`).

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::CriteriaError;

/// Condition of a single clause.
///
/// - **Every filter**: `Eq`, `Ne`, `In`, `NotIn`, `Specified`
/// - **Range filters**: `Gt`, `Gte`, `Lt`, `Lte`
/// - **String filters**: `Contains`, `DoesNotContain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Value is one of a list.
    In,
    /// Value is none of a list.
    NotIn,
    /// Field presence (`true`) or absence (`false`).
    Specified,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Case-insensitive substring match.
    Contains,
    /// Negated case-insensitive substring match.
    DoesNotContain,
}

impl Op {
    /// All conditions, in diagnostic order.
    pub const ALL: [Op; 11] = [
        Op::Eq,
        Op::Ne,
        Op::Specified,
        Op::In,
        Op::NotIn,
        Op::Gt,
        Op::Lt,
        Op::Gte,
        Op::Lte,
        Op::Contains,
        Op::DoesNotContain,
    ];

    /// Returns `true` if every filter kind accepts this condition.
    pub fn is_common(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::In | Op::NotIn | Op::Specified)
    }

    /// Returns `true` if this condition is only valid on range filters.
    pub fn is_range(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` if this condition is only valid on string filters.
    pub fn is_string(self) -> bool {
        matches!(self, Op::Contains | Op::DoesNotContain)
    }

    /// Returns `true` if the literal for this condition is a list.
    pub fn takes_list(self) -> bool {
        matches!(self, Op::In | Op::NotIn)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the wire name of this condition.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "equals",
            Op::Ne => "notEquals",
            Op::In => "in",
            Op::NotIn => "notIn",
            Op::Specified => "specified",
            Op::Gt => "greaterThan",
            Op::Gte => "greaterThanOrEqual",
            Op::Lt => "lessThan",
            Op::Lte => "lessThanOrEqual",
            Op::Contains => "contains",
            Op::DoesNotContain => "doesNotContain",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Op {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownCondition {
                field: String::new(),
                condition: s.to_string(),
            })
    }
}
