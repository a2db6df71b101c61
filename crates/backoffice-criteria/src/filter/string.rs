//! String filters with case-insensitive substring conditions.

use std::fmt;

use crate::clause::Clause;
use crate::error::Result;
use crate::filter::{write_conditions, FieldFilter, Filter, FilterValue};
use crate::op::Op;

/// Filter over string fields.
///
/// `equals` is case-sensitive; `contains` and `doesNotContain` compare
/// upper-cased text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringFilter {
    pub base: Filter<String>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    pub fn new() -> Self {
        StringFilter::default()
    }

    pub fn equals(mut self, value: impl Into<String>) -> Self {
        self.base.equals = Some(value.into());
        self
    }

    pub fn not_equals(mut self, value: impl Into<String>) -> Self {
        self.base.not_equals = Some(value.into());
        self
    }

    pub fn specified(mut self, specified: bool) -> Self {
        self.base.specified = Some(specified);
        self
    }

    pub fn in_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.in_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn not_in_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.not_in_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn contains(mut self, value: impl Into<String>) -> Self {
        self.contains = Some(value.into());
        self
    }

    pub fn does_not_contain(mut self, value: impl Into<String>) -> Self {
        self.does_not_contain = Some(value.into());
        self
    }

    /// Returns an independent, value-equal copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn patterns(&self) -> [(Op, Option<&String>); 2] {
        [
            (Op::Contains, self.contains.as_ref()),
            (Op::DoesNotContain, self.does_not_contain.as_ref()),
        ]
    }
}

impl FieldFilter for StringFilter {
    fn clauses(&self, field: &str) -> Vec<Clause> {
        let mut out = Vec::new();
        self.base.push_clauses(field, &mut out);
        for (op, pattern) in self.patterns() {
            if let Some(pattern) = pattern {
                out.push(Clause::new(field, op, pattern.as_str()));
            }
        }
        out
    }

    fn bind(&mut self, field: &str, op: Op, raw: &str) -> Result<()> {
        match op {
            Op::Contains => self.contains = Some(raw.to_string()),
            Op::DoesNotContain => self.does_not_contain = Some(raw.to_string()),
            _ => return self.base.bind_common(field, op, raw, String::FILTER_NAME),
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        !self.base.has_conditions() && self.contains.is_none() && self.does_not_contain.is_none()
    }

    fn filter_name(&self) -> &'static str {
        String::FILTER_NAME
    }
}

impl fmt::Display for StringFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut conditions = Vec::new();
        self.base.push_conditions(&mut conditions);
        for (op, pattern) in self.patterns() {
            if let Some(pattern) = pattern {
                conditions.push((op, pattern.clone()));
            }
        }
        write_conditions(f, String::FILTER_NAME, &conditions)
    }
}
