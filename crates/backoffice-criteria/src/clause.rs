//! Leaf predicates.
//!
//! A [`Clause`] is one compiled filter condition: a field name, a condition,
//! and an owned literal. Filters compile into one clause per set condition.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::op::Op;
use crate::ordering::compare_values;
use crate::value::{Number, Timestamp, Value};

/// A single compiled condition on one field.
///
/// # Example
///
/// ```
/// use backoffice_criteria::{Clause, ClauseValue, Op, Value};
///
/// let clause = Clause::new("name", Op::Contains, ClauseValue::String("acme".into()));
/// assert!(clause.matches(&Value::String("ACME Corp")));
/// assert!(!clause.matches(&Value::None));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field wire name.
    pub field: String,
    /// The condition.
    pub op: Op,
    /// The literal to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// `Specified` tests presence. Every other condition fails on an absent
    /// field, mirroring SQL three-valued logic where `NULL <> x` is not true.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        if self.op == Op::Specified {
            return match self.value {
                ClauseValue::Bool(required) => field_value.is_present() == required,
                _ => false,
            };
        }

        if field_value.is_none() {
            return false;
        }

        match self.op {
            Op::Contains | Op::DoesNotContain => self.match_substring(field_value),
            Op::In => match &self.value {
                ClauseValue::List(items) => items.iter().any(|item| {
                    compare_values(field_value, &item.as_value()) == Some(Ordering::Equal)
                }),
                _ => false,
            },
            Op::NotIn => match &self.value {
                ClauseValue::List(items) => items.iter().all(|item| {
                    matches!(
                        compare_values(field_value, &item.as_value()),
                        Some(Ordering::Less | Ordering::Greater)
                    )
                }),
                _ => false,
            },
            op => match compare_values(field_value, &self.value.as_value()) {
                Some(ordering) => op.eval_ordering(ordering),
                None => false, // type mismatch or NaN
            },
        }
    }

    fn match_substring(&self, field_value: &Value<'_>) -> bool {
        let (Value::String(haystack), ClauseValue::String(needle)) = (field_value, &self.value)
        else {
            return false;
        };
        let found = haystack.to_uppercase().contains(&needle.to_uppercase());
        match self.op {
            Op::Contains => found,
            Op::DoesNotContain => !found,
            _ => false,
        }
    }
}

/// Owned literal stored in a clause.
///
/// Unlike [`Value`], which borrows from the entity, `ClauseValue` owns its
/// data so it can live inside a compiled specification.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    String(String),
    Number(Number),
    Decimal(Decimal),
    Date(NaiveDate),
    Timestamp(Timestamp),
    /// Enum discriminant.
    Enum(u32),
    Bool(bool),
    /// Literal list for `In` and `NotIn`.
    List(Vec<ClauseValue>),
}

impl ClauseValue {
    /// Borrows this literal as a runtime value.
    ///
    /// Lists have no scalar view and read as [`Value::None`].
    pub fn as_value(&self) -> Value<'_> {
        match self {
            ClauseValue::String(s) => Value::String(s),
            ClauseValue::Number(n) => Value::Number(*n),
            ClauseValue::Decimal(d) => Value::Decimal(*d),
            ClauseValue::Date(d) => Value::Date(*d),
            ClauseValue::Timestamp(t) => Value::Timestamp(*t),
            ClauseValue::Enum(e) => Value::Enum(*e),
            ClauseValue::Bool(b) => Value::Bool(*b),
            ClauseValue::List(_) => Value::None,
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<Decimal> for ClauseValue {
    fn from(d: Decimal) -> Self {
        ClauseValue::Decimal(d)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::I64(n))
    }
}

impl From<Vec<ClauseValue>> for ClauseValue {
    fn from(items: Vec<ClauseValue>) -> Self {
        ClauseValue::List(items)
    }
}
