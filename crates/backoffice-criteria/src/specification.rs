//! Composable entity predicates and the criteria compiler.
//!
//! A [`Specification`] is a conjunction of [`Clause`]s plus a `distinct`
//! modifier. [`create_specification`] is the single entry point turning a
//! criteria value into one:
//!
//! ```text
//! spec = [distinct]
//!      ∧ clauses(field₁)
//!      ∧ clauses(field₂)
//!      ∧ ...
//! ```
//!
//! Fields whose filter is absent or empty contribute nothing, so an empty
//! criteria compiles to the unrestricted specification.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::clause::Clause;
use crate::criteria::Criteria;
use crate::traits::Queryable;

/// A predicate over entities of type `E`.
pub struct Specification<E> {
    clauses: Vec<Clause>,
    distinct: bool,
    _entity: PhantomData<fn(&E) -> bool>,
}

impl<E> Specification<E> {
    /// The unrestricted specification: matches every entity.
    pub fn all() -> Self {
        Specification {
            clauses: Vec::new(),
            distinct: false,
            _entity: PhantomData,
        }
    }

    /// Matches every entity and asks the repository to collapse duplicates.
    pub fn distinct() -> Self {
        Specification {
            distinct: true,
            ..Specification::all()
        }
    }

    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        Specification {
            clauses,
            ..Specification::all()
        }
    }

    /// Conjunction of `self` and `other`.
    ///
    /// The result is distinct if either side is.
    pub fn and(mut self, other: Specification<E>) -> Self {
        self.clauses.extend(other.clauses);
        self.distinct |= other.distinct;
        self
    }

    /// The conjoined clauses, in composition order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Returns `true` if no clause restricts the result set.
    pub fn is_unrestricted(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl<E: Queryable> Specification<E> {
    /// Tests a single entity against every clause.
    pub fn matches(&self, entity: &E) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.matches(&entity.field_value(&clause.field)))
    }
}

impl<E> Default for Specification<E> {
    fn default() -> Self {
        Specification::all()
    }
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Specification {
            clauses: self.clauses.clone(),
            distinct: self.distinct,
            _entity: PhantomData,
        }
    }
}

impl<E> PartialEq for Specification<E> {
    fn eq(&self, other: &Self) -> bool {
        self.clauses == other.clauses && self.distinct == other.distinct
    }
}

impl<E> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("clauses", &self.clauses)
            .field("distinct", &self.distinct)
            .finish()
    }
}

/// Compiles a criteria value into a specification over its entity.
///
/// `None` compiles to the unrestricted specification. The distinct modifier
/// is applied first, followed by each present filter in declaration order.
/// Compilation is pure and cannot fail.
pub fn create_specification<C: Criteria>(criteria: Option<&C>) -> Specification<C::Entity> {
    let Some(criteria) = criteria else {
        debug!(criteria = C::TYPE_NAME, "no criteria, unrestricted specification");
        return Specification::all();
    };

    let mut spec = Specification::all();
    if criteria.distinct() == Some(true) {
        spec = spec.and(Specification::distinct());
    }
    for (field, filter) in criteria.filters() {
        if let Some(filter) = filter {
            spec = spec.and(Specification::from_clauses(filter.clauses(field)));
        }
    }

    debug!(
        criteria = C::TYPE_NAME,
        clauses = spec.clauses.len(),
        distinct = spec.distinct,
        "compiled specification"
    );
    spec
}
