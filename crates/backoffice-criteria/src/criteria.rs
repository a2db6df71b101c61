//! Per-entity criteria.
//!
//! A criteria type is a fixed set of optional filters, one per queryable
//! entity field, plus a `distinct` flag. It is a plain value: equality and
//! hashing are structural, and cloning deep-copies every filter.
//!
//! Criteria types are declared as structs of `Option<...Filter>` fields and
//! derive their wiring with `#[derive(Criteria)]` from `backoffice-macros`.

use std::fmt;
use std::hash::Hash;

use crate::error::{CriteriaError, Result};
use crate::filter::FieldFilter;
use crate::op::Op;
use crate::traits::Queryable;

/// A per-entity set of optional field filters.
pub trait Criteria: Clone + Default + PartialEq + Eq + Hash + fmt::Debug + fmt::Display {
    /// The entity the compiled specification is evaluated against.
    type Entity: Queryable;

    /// Type name used in diagnostics (`BankAccountCriteria`).
    const TYPE_NAME: &'static str;

    /// Wire names of the declared filter fields, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Every declared field with its filter, in declaration order.
    fn filters(&self) -> Vec<(&'static str, Option<&dyn FieldFilter>)>;

    /// Returns the filter for `field`, creating an empty one if absent.
    ///
    /// Returns `None` if the criteria does not declare `field`.
    fn filter_or_default(&mut self, field: &str) -> Option<&mut dyn FieldFilter>;

    fn distinct(&self) -> Option<bool>;

    fn set_distinct(&mut self, distinct: Option<bool>);

    /// Returns a value-equal criteria whose filters are independent copies.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Sets one condition from its textual form, as in `name.contains=Acme`.
    ///
    /// On error `self` is left unchanged.
    fn bind(&mut self, field: &str, op: Op, raw: &str) -> Result<()> {
        let mut next = self.clone();
        next.filter_or_default(field)
            .ok_or_else(|| CriteriaError::UnknownField {
                criteria: Self::TYPE_NAME,
                field: field.to_string(),
            })?
            .bind(field, op, raw)?;
        *self = next;
        Ok(())
    }
}

/// Renders `Name{field=<filter>, ..., distinct=<bool>, }` listing only the
/// fields that are set.
///
/// Used by the `Display` implementation `#[derive(Criteria)]` generates.
pub fn write_criteria<C: Criteria>(criteria: &C, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{{", C::TYPE_NAME)?;
    for (field, filter) in criteria.filters() {
        if let Some(filter) = filter {
            write!(f, "{field}={filter}, ")?;
        }
    }
    if let Some(distinct) = criteria.distinct() {
        write!(f, "distinct={distinct}, ")?;
    }
    f.write_str("}")
}
