//! Equality filters shared by every filter kind.

use std::fmt;

use crate::clause::{Clause, ClauseValue};
use crate::error::Result;
use crate::filter::{
    parse_list, parse_literal, render_list, unsupported, write_conditions, FieldFilter,
    FilterValue,
};
use crate::op::Op;

/// Equality filter: the conditions every filter kind shares.
///
/// Used directly for closed value sets (booleans, domain enums) and embedded
/// by [`RangeFilter`](crate::RangeFilter) and
/// [`StringFilter`](crate::StringFilter).
///
/// # Example
///
/// ```
/// use backoffice_criteria::{BooleanFilter, FieldFilter};
///
/// let filter = BooleanFilter::new().equals(true);
/// assert_eq!(filter.to_string(), "BooleanFilter [equals=true]");
/// assert_eq!(filter.clauses("active").len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    /// `Some(true)`: field must be present. `Some(false)`: must be absent.
    pub specified: Option<bool>,
    pub in_values: Option<Vec<T>>,
    pub not_in_values: Option<Vec<T>>,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter {
            equals: None,
            not_equals: None,
            specified: None,
            in_values: None,
            not_in_values: None,
        }
    }
}

impl<T: FilterValue> Filter<T> {
    /// Creates a filter with no condition set.
    pub fn new() -> Self {
        Filter::default()
    }

    pub fn equals(mut self, value: T) -> Self {
        self.equals = Some(value);
        self
    }

    pub fn not_equals(mut self, value: T) -> Self {
        self.not_equals = Some(value);
        self
    }

    pub fn specified(mut self, specified: bool) -> Self {
        self.specified = Some(specified);
        self
    }

    pub fn in_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.in_values = Some(values.into_iter().collect());
        self
    }

    pub fn not_in_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.not_in_values = Some(values.into_iter().collect());
        self
    }

    /// Returns an independent, value-equal copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub(crate) fn has_conditions(&self) -> bool {
        self.equals.is_some()
            || self.not_equals.is_some()
            || self.specified.is_some()
            || self.in_values.is_some()
            || self.not_in_values.is_some()
    }

    pub(crate) fn push_clauses(&self, field: &str, out: &mut Vec<Clause>) {
        if let Some(value) = &self.equals {
            out.push(Clause::new(field, Op::Eq, value.to_clause_value()));
        }
        if let Some(value) = &self.not_equals {
            out.push(Clause::new(field, Op::Ne, value.to_clause_value()));
        }
        if let Some(specified) = self.specified {
            out.push(Clause::new(field, Op::Specified, specified));
        }
        if let Some(values) = &self.in_values {
            out.push(Clause::new(field, Op::In, list(values)));
        }
        if let Some(values) = &self.not_in_values {
            out.push(Clause::new(field, Op::NotIn, list(values)));
        }
    }

    /// Binds one of the shared conditions; other conditions are rejected
    /// with `filter_name` in the error.
    pub(crate) fn bind_common(
        &mut self,
        field: &str,
        op: Op,
        raw: &str,
        filter_name: &'static str,
    ) -> Result<()> {
        match op {
            Op::Eq => self.equals = Some(parse_literal(field, op, raw)?),
            Op::Ne => self.not_equals = Some(parse_literal(field, op, raw)?),
            Op::Specified => self.specified = Some(parse_literal(field, op, raw)?),
            Op::In => {
                let values = parse_list(field, op, raw)?;
                self.in_values.get_or_insert_with(Vec::new).extend(values);
            }
            Op::NotIn => {
                let values = parse_list(field, op, raw)?;
                self.not_in_values.get_or_insert_with(Vec::new).extend(values);
            }
            _ => return Err(unsupported(field, op, filter_name)),
        }
        Ok(())
    }

    pub(crate) fn push_conditions(&self, out: &mut Vec<(Op, String)>) {
        if let Some(value) = &self.equals {
            out.push((Op::Eq, value.to_string()));
        }
        if let Some(value) = &self.not_equals {
            out.push((Op::Ne, value.to_string()));
        }
        if let Some(specified) = self.specified {
            out.push((Op::Specified, specified.to_string()));
        }
        if let Some(values) = &self.in_values {
            out.push((Op::In, render_list(values)));
        }
        if let Some(values) = &self.not_in_values {
            out.push((Op::NotIn, render_list(values)));
        }
    }
}

fn list<T: FilterValue>(values: &[T]) -> ClauseValue {
    ClauseValue::List(values.iter().map(FilterValue::to_clause_value).collect())
}

impl<T: FilterValue> FieldFilter for Filter<T> {
    fn clauses(&self, field: &str) -> Vec<Clause> {
        let mut out = Vec::new();
        self.push_clauses(field, &mut out);
        out
    }

    fn bind(&mut self, field: &str, op: Op, raw: &str) -> Result<()> {
        self.bind_common(field, op, raw, T::FILTER_NAME)
    }

    fn is_empty(&self) -> bool {
        !self.has_conditions()
    }

    fn filter_name(&self) -> &'static str {
        T::FILTER_NAME
    }
}

impl<T: FilterValue> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut conditions = Vec::new();
        self.push_conditions(&mut conditions);
        write_conditions(f, T::FILTER_NAME, &conditions)
    }
}
