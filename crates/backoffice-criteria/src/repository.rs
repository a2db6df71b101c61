//! Storage collaborators.
//!
//! A [`Repository`] evaluates a compiled [`Specification`] against its
//! persisted collection. [`MemoryRepository`] is the in-memory store used by
//! tests and embedded callers; other stores translate the specification's
//! clauses into their own query language.

use std::collections::HashSet;
use std::convert::Infallible;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result as CriteriaResult;
use crate::ordering::compare_by_orderings;
use crate::page::{Page, PageRequest};
use crate::specification::Specification;
use crate::traits::Queryable;
use crate::value::{Number, Timestamp, Value};

/// A persisted collection of `E` that can be queried by specification.
pub trait Repository<E> {
    /// Storage failure. Propagated unchanged by the query service.
    type Error: std::error::Error;

    /// Returns the requested page of matches, plus the total match count.
    fn find_all(
        &self,
        spec: &Specification<E>,
        request: &PageRequest,
    ) -> Result<Page<E>, Self::Error>;

    /// Counts the matches without materializing them.
    fn count(&self, spec: &Specification<E>) -> Result<u64, Self::Error>;
}

/// Rows held in insertion order.
///
/// Evaluation runs filter, then identity deduplication when the
/// specification is distinct, then a stable sort by the request's orderings,
/// then the offset/limit slice. Unsorted requests return rows in insertion
/// order.
///
/// # Example
///
/// ```
/// use backoffice_criteria::{
///     FieldValue, MemoryRepository, PageRequest, Queryable, Repository, Specification, Value,
/// };
///
/// #[derive(Clone)]
/// struct Vehicle {
///     id: Option<i64>,
/// }
///
/// impl Queryable for Vehicle {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => self.id.field_value(),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let repo: MemoryRepository<Vehicle> = (1..=5).map(|id| Vehicle { id: Some(id) }).collect();
/// let page = repo.find_all(&Specification::all(), &PageRequest::of(1, 2)).unwrap();
/// assert_eq!(page.content.len(), 2);
/// assert_eq!(page.total_elements, 5);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryRepository<E> {
    rows: Vec<E>,
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        MemoryRepository { rows: Vec::new() }
    }

    pub fn insert(&mut self, row: E) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E: DeserializeOwned> MemoryRepository<E> {
    /// Loads rows from a YAML sequence, in document order.
    pub fn from_yaml_str(yaml: &str) -> CriteriaResult<Self> {
        let rows: Vec<E> = serde_yaml::from_str(yaml)?;
        debug!(rows = rows.len(), "loaded memory repository");
        Ok(MemoryRepository { rows })
    }
}

impl<E: Queryable> MemoryRepository<E> {
    /// Matching rows, deduplicated by identity when the specification is
    /// distinct. Rows without an identity are never merged.
    fn select(&self, spec: &Specification<E>) -> Vec<&E> {
        let matched = self.rows.iter().filter(|row| spec.matches(row));
        if !spec.is_distinct() {
            return matched.collect();
        }

        let mut seen = HashSet::new();
        matched
            .filter(|&row| match IdentityKey::of(row.identity()) {
                Some(key) => seen.insert(key),
                None => true,
            })
            .collect()
    }
}

/// Hashable form of an entity identity.
///
/// Equal keys mean equal identities under [`Value`]'s `PartialEq`, except
/// that a NaN float identity merges with itself.
#[derive(Debug, PartialEq, Eq, Hash)]
enum IdentityKey<'a> {
    String(&'a str),
    Signed(i64),
    Unsigned(u64),
    Float(u64),
    Decimal(Decimal),
    Date(NaiveDate),
    Timestamp(Timestamp),
    Enum(u32),
    Bool(bool),
}

impl<'a> IdentityKey<'a> {
    /// `None` for an absent identity.
    fn of(value: Value<'a>) -> Option<Self> {
        let key = match value {
            Value::String(s) => IdentityKey::String(s),
            Value::Number(Number::I64(n)) => IdentityKey::Signed(n),
            Value::Number(Number::U64(n)) => IdentityKey::Unsigned(n),
            // -0.0 == 0.0
            Value::Number(Number::F64(n)) => IdentityKey::Float((n + 0.0).to_bits()),
            Value::Decimal(d) => IdentityKey::Decimal(d.normalize()),
            Value::Date(d) => IdentityKey::Date(d),
            Value::Timestamp(t) => IdentityKey::Timestamp(t),
            Value::Enum(e) => IdentityKey::Enum(e),
            Value::Bool(b) => IdentityKey::Bool(b),
            Value::None => return None,
        };
        Some(key)
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        MemoryRepository::new()
    }
}

impl<E> From<Vec<E>> for MemoryRepository<E> {
    fn from(rows: Vec<E>) -> Self {
        MemoryRepository { rows }
    }
}

impl<E> FromIterator<E> for MemoryRepository<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        MemoryRepository {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for MemoryRepository<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl<E: Queryable + Clone> Repository<E> for MemoryRepository<E> {
    type Error = Infallible;

    fn find_all(
        &self,
        spec: &Specification<E>,
        request: &PageRequest,
    ) -> Result<Page<E>, Self::Error> {
        let mut selected = self.select(spec);
        let total = selected.len();

        if !request.sort.is_empty() {
            selected.sort_by(|a, b| compare_by_orderings(*a, *b, &request.sort, &E::accessor));
        }

        let content: Vec<E> = selected
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .cloned()
            .collect();

        debug!(
            rows = self.rows.len(),
            matched = total,
            returned = content.len(),
            page = request.page,
            size = request.size,
            "memory repository find_all"
        );
        Ok(Page::new(content, request, total as u64))
    }

    fn count(&self, spec: &Specification<E>) -> Result<u64, Self::Error> {
        let total = self.select(spec).len();
        debug!(rows = self.rows.len(), matched = total, "memory repository count");
        Ok(total as u64)
    }
}
