//! Criteria - typed filter criteria compiled into entity specifications.
//!
//! This crate is the query core of the back-office services. Each entity has
//! a criteria type: a bundle of optional per-field filters plus a `distinct`
//! flag. [`create_specification`] compiles a criteria value into a
//! [`Specification`], a storage-independent conjunction of clauses that a
//! [`Repository`] evaluates for a page of results or a count.
//!
//! - Typed filters: [`Filter`], [`RangeFilter`], [`StringFilter`] and aliases
//! - Tri-state `specified` presence checks and SQL-like null handling
//! - Distinct results, multi-field sorting, offset/limit paging
//! - Query-string binding (`name.contains=Acme`) with typed errors
//!
//! # Quick Start
//!
//! ```rust
//! use backoffice_criteria::{
//!     FieldFilter, FieldValue, MemoryRepository, PageRequest, Queryable, Repository,
//!     Specification, StringFilter, Value,
//! };
//!
//! #[derive(Clone)]
//! struct Customer {
//!     id: Option<i64>,
//!     name: Option<String>,
//! }
//!
//! impl Queryable for Customer {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "id" => self.id.field_value(),
//!             "name" => self.name.field_value(),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let repo: MemoryRepository<Customer> = ["Acme", "Acme Corp", "Other"]
//!     .into_iter()
//!     .zip(1..)
//!     .map(|(name, id)| Customer { id: Some(id), name: Some(name.to_string()) })
//!     .collect();
//!
//! let filter = StringFilter::new().contains("acme");
//! let spec = Specification::from_clauses(filter.clauses("name"));
//!
//! let page = repo.find_all(&spec, &PageRequest::of(0, 20)).unwrap();
//! assert_eq!(page.total_elements, 2);
//! ```
//!
//! In the services, criteria types and entity accessors are derived with
//! `#[derive(Criteria)]` and `#[derive(Queryable)]` from `backoffice-macros`,
//! and queries run through a [`QueryService`].
//!
//! # Condition Semantics
//!
//! | Condition | Matches |
//! |-----------|---------|
//! | `specified=true` / `false` | field present / absent |
//! | `equals`, `notEquals` | present and (not) equal |
//! | `in`, `notIn` | present and (not) in the list; `in=[]` matches nothing |
//! | `greaterThan` ... `lessThanOrEqual` | present and within the bound |
//! | `contains`, `doesNotContain` | present and (not) containing the text, ignoring case |
//!
//! An absent field fails every condition except `specified`. All conditions
//! on all fields are ANDed.

mod clause;
mod config;
mod criteria;
mod enumeration;
mod error;
mod filter;
mod op;
mod ordering;
mod page;
mod params;
mod repository;
mod service;
mod specification;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use config::QueryConfig;
pub use criteria::{write_criteria, Criteria};
pub use error::{CriteriaError, Result};
pub use filter::{
    BigDecimalFilter, BooleanFilter, FieldFilter, Filter, FilterValue, InstantFilter,
    IntegerFilter, LocalDateFilter, LongFilter, RangeFilter, StringFilter,
};
pub use op::Op;
pub use ordering::{compare_by_orderings, compare_values, Dir, OrderBy};
pub use page::{Page, PageRequest};
pub use params::{bind_criteria, bind_page_request};
pub use repository::{MemoryRepository, Repository};
pub use service::QueryService;
pub use specification::{create_specification, Specification};
pub use traits::Queryable;
pub use value::{FieldValue, Number, Timestamp, Value};

// Re-exported for generated code and domain types.
pub use chrono;
pub use rust_decimal;
pub use serde;
