//! Per-field filter primitives.
//!
//! A filter is the optional condition set of a single criteria field. Three
//! kinds exist:
//!
//! | Kind | Type | Conditions |
//! |------|------|------------|
//! | equality | [`Filter<T>`] | `equals`, `notEquals`, `specified`, `in`, `notIn` |
//! | range | [`RangeFilter<T>`] | equality + `greaterThan`, `greaterThanOrEqual`, `lessThan`, `lessThanOrEqual` |
//! | string | [`StringFilter`] | equality + `contains`, `doesNotContain` |
//!
//! All conditions set on one filter are ANDed. A filter with no condition set
//! compiles to no clause at all, so it never excludes an entity.

mod equality;
mod literal;
mod range;
mod string;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::clause::Clause;
use crate::error::{CriteriaError, Result};
use crate::op::Op;

pub use equality::Filter;
pub use literal::FilterValue;
pub use range::RangeFilter;
pub use string::StringFilter;

/// Range filter over `i64` values.
pub type LongFilter = RangeFilter<i64>;
/// Range filter over `i32` values.
pub type IntegerFilter = RangeFilter<i32>;
/// Range filter over exact decimals.
pub type BigDecimalFilter = RangeFilter<Decimal>;
/// Range filter over calendar dates.
pub type LocalDateFilter = RangeFilter<NaiveDate>;
/// Range filter over UTC instants.
pub type InstantFilter = RangeFilter<DateTime<Utc>>;
/// Equality filter over booleans.
pub type BooleanFilter = Filter<bool>;

/// Object-safe view of a filter, used by the specification compiler and the
/// query-parameter binder.
pub trait FieldFilter: fmt::Debug + fmt::Display {
    /// Compiles the set conditions into clauses on `field`.
    fn clauses(&self, field: &str) -> Vec<Clause>;

    /// Sets one condition from its textual literal.
    fn bind(&mut self, field: &str, op: Op, raw: &str) -> Result<()>;

    /// Returns `true` if no condition is set.
    fn is_empty(&self) -> bool;

    /// Display name of the filter (`StringFilter`, `LongFilter`, ...).
    fn filter_name(&self) -> &'static str;
}

/// Parses a single literal for `field.op`.
pub(crate) fn parse_literal<T: FilterValue>(field: &str, op: Op, raw: &str) -> Result<T> {
    T::parse_literal(raw).map_err(|reason| CriteriaError::InvalidLiteral {
        field: field.to_string(),
        condition: op.as_str(),
        value: raw.to_string(),
        reason,
    })
}

/// Parses a comma-separated literal list for `field.op`.
pub(crate) fn parse_list<T: FilterValue>(field: &str, op: Op, raw: &str) -> Result<Vec<T>> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_literal(field, op, item))
        .collect()
}

pub(crate) fn unsupported(field: &str, op: Op, filter: &'static str) -> CriteriaError {
    CriteriaError::UnsupportedCondition {
        field: field.to_string(),
        condition: op.as_str(),
        filter,
    }
}

/// Renders `name [cond=value, cond=value]`.
pub(crate) fn write_conditions(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    conditions: &[(Op, String)],
) -> fmt::Result {
    write!(f, "{name} [")?;
    for (i, (op, value)) in conditions.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{op}={value}")?;
    }
    f.write_str("]")
}

pub(crate) fn render_list<T: fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
