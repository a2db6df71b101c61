//! Range filters over ordered values.

use std::fmt;

use crate::clause::Clause;
use crate::error::Result;
use crate::filter::{parse_literal, write_conditions, FieldFilter, Filter, FilterValue};
use crate::op::Op;

/// Filter over an ordered value type, adding bound conditions to the shared
/// equality conditions.
///
/// Bounds combine with every other set condition, so
/// `greaterThan=10` together with `in=[5, 20]` selects only `20`.
///
/// # Example
///
/// ```
/// use backoffice_criteria::{FieldFilter, LongFilter};
///
/// let filter = LongFilter::new().greater_than_or_equal(10).less_than(20);
/// assert_eq!(filter.to_string(), "LongFilter [lessThan=20, greaterThanOrEqual=10]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeFilter<T> {
    pub base: Filter<T>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        RangeFilter {
            base: Filter::default(),
            greater_than: None,
            greater_than_or_equal: None,
            less_than: None,
            less_than_or_equal: None,
        }
    }
}

impl<T: FilterValue + Ord> RangeFilter<T> {
    pub fn new() -> Self {
        RangeFilter::default()
    }

    pub fn equals(mut self, value: T) -> Self {
        self.base.equals = Some(value);
        self
    }

    pub fn not_equals(mut self, value: T) -> Self {
        self.base.not_equals = Some(value);
        self
    }

    pub fn specified(mut self, specified: bool) -> Self {
        self.base.specified = Some(specified);
        self
    }

    pub fn in_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.base = self.base.in_values(values);
        self
    }

    pub fn not_in_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.base = self.base.not_in_values(values);
        self
    }

    pub fn greater_than(mut self, value: T) -> Self {
        self.greater_than = Some(value);
        self
    }

    pub fn greater_than_or_equal(mut self, value: T) -> Self {
        self.greater_than_or_equal = Some(value);
        self
    }

    pub fn less_than(mut self, value: T) -> Self {
        self.less_than = Some(value);
        self
    }

    pub fn less_than_or_equal(mut self, value: T) -> Self {
        self.less_than_or_equal = Some(value);
        self
    }

    /// Returns an independent, value-equal copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn bounds(&self) -> [(Op, Option<&T>); 4] {
        [
            (Op::Gt, self.greater_than.as_ref()),
            (Op::Lt, self.less_than.as_ref()),
            (Op::Gte, self.greater_than_or_equal.as_ref()),
            (Op::Lte, self.less_than_or_equal.as_ref()),
        ]
    }
}

impl<T: FilterValue + Ord> FieldFilter for RangeFilter<T> {
    fn clauses(&self, field: &str) -> Vec<Clause> {
        let mut out = Vec::new();
        self.base.push_clauses(field, &mut out);
        for (op, bound) in self.bounds() {
            if let Some(value) = bound {
                out.push(Clause::new(field, op, value.to_clause_value()));
            }
        }
        out
    }

    fn bind(&mut self, field: &str, op: Op, raw: &str) -> Result<()> {
        let slot = match op {
            Op::Gt => &mut self.greater_than,
            Op::Gte => &mut self.greater_than_or_equal,
            Op::Lt => &mut self.less_than,
            Op::Lte => &mut self.less_than_or_equal,
            _ => return self.base.bind_common(field, op, raw, T::FILTER_NAME),
        };
        *slot = Some(parse_literal(field, op, raw)?);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        !self.base.has_conditions() && self.bounds().iter().all(|(_, bound)| bound.is_none())
    }

    fn filter_name(&self) -> &'static str {
        T::FILTER_NAME
    }
}

impl<T: FilterValue + Ord> fmt::Display for RangeFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut conditions = Vec::new();
        self.base.push_conditions(&mut conditions);
        for (op, bound) in self.bounds() {
            if let Some(value) = bound {
                conditions.push((op, value.to_string()));
            }
        }
        write_conditions(f, T::FILTER_NAME, &conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::LongFilter;
    use crate::value::{Number, Value};
    use rust_decimal::Decimal;

    fn matches_all(filter: &RangeFilter<i64>, n: i64) -> bool {
        filter
            .clauses("value")
            .iter()
            .all(|c| c.matches(&Value::Number(Number::I64(n))))
    }

    #[test]
    fn bounds_are_anded() {
        let filter = RangeFilter::new().greater_than(10i64).less_than_or_equal(20);
        assert!(!matches_all(&filter, 10));
        assert!(matches_all(&filter, 11));
        assert!(matches_all(&filter, 20));
        assert!(!matches_all(&filter, 21));
    }

    #[test]
    fn range_and_membership_combine() {
        let filter = RangeFilter::new().greater_than(10i64).in_values([5, 20]);
        assert!(!matches_all(&filter, 5));
        assert!(matches_all(&filter, 20));
    }

    #[test]
    fn bind_bounds_and_common_conditions() {
        let mut filter: RangeFilter<Decimal> = RangeFilter::new();
        filter.bind("totalAmount", Op::Gte, "50.00").unwrap();
        filter.bind("totalAmount", Op::Specified, "true").unwrap();
        assert_eq!(filter.greater_than_or_equal, Some(Decimal::new(5000, 2)));
        assert_eq!(filter.base.specified, Some(true));
    }

    #[test]
    fn bind_rejects_string_conditions() {
        let mut filter: RangeFilter<i64> = RangeFilter::new();
        assert!(filter.bind("id", Op::Contains, "1").is_err());
        assert!(filter.is_empty());
    }

    #[test]
    fn failed_in_bind_keeps_filter_empty() {
        let mut filter = LongFilter::new();
        assert!(filter.bind("id", Op::In, "1,x").is_err());
        assert_eq!(filter.base.in_values, None);
        assert_eq!(filter.to_string(), "LongFilter []");
    }

    #[test]
    fn display_order() {
        let filter = RangeFilter::new()
            .less_than_or_equal(9i64)
            .greater_than(1)
            .equals(5);
        assert_eq!(
            filter.to_string(),
            "LongFilter [equals=5, greaterThan=1, lessThanOrEqual=9]"
        );
    }
}
