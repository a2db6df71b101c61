//! Query-string binding.
//!
//! Criteria and page requests can be built from flat `key=value` pairs:
//!
//! | Key | Binds |
//! |-----|-------|
//! | `<field>.<condition>` | one filter condition (`name.contains=Acme`) |
//! | `distinct` | the distinct flag (`true`/`false`) |
//! | `page` | zero-based page number |
//! | `size` | page size, defaulted and clamped by [`QueryConfig`] |
//! | `sort` | `<field>[,asc|desc]`, repeatable |
//!
//! Sort fields are not checked here, since paging binds without knowing the
//! entity. A field the entity does not have sorts nothing; see
//! [`PageRequest::validate_sort`] to reject it instead.
//!
//! `in` and `notIn` take comma-separated lists; repeating the key appends to
//! the list. Repeating any other condition keeps the last value. Any bad
//! parameter fails the whole bind.

use tracing::debug;

use crate::config::QueryConfig;
use crate::criteria::Criteria;
use crate::error::{CriteriaError, Result};
use crate::op::Op;
use crate::ordering::{Dir, OrderBy};
use crate::page::PageRequest;

const PAGING_KEYS: [&str; 3] = ["page", "size", "sort"];

/// Builds a criteria value from query parameters.
///
/// Paging keys are skipped so the same parameter list can feed
/// [`bind_page_request`].
///
/// # Example
///
/// ```ignore
/// let criteria: InvoiceCriteria = bind_criteria([
///     ("status.in", "DRAFT,SENT"),
///     ("totalAmount.greaterThanOrEqual", "50.00"),
///     ("page", "0"),
/// ])?;
/// ```
pub fn bind_criteria<C, I, K, V>(params: I) -> Result<C>
where
    C: Criteria,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut criteria = C::default();
    for (key, value) in params {
        let (key, value) = (key.as_ref(), value.as_ref());
        if PAGING_KEYS.contains(&key) {
            continue;
        }
        if key == "distinct" {
            criteria.set_distinct(Some(parse_distinct(value)?));
            continue;
        }

        let (field, op) = split_key(key)?;
        criteria.bind(field, op, value)?;
    }
    debug!(criteria = %criteria, "bound criteria from parameters");
    Ok(criteria)
}

/// Builds a page request from the `page`, `size` and `sort` parameters.
///
/// Other keys are ignored. Sort fields are accepted as given.
pub fn bind_page_request<I, K, V>(params: I, config: &QueryConfig) -> Result<PageRequest>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut page = 0;
    let mut size = None;
    let mut sort = Vec::new();

    for (key, value) in params {
        let value = value.as_ref();
        match key.as_ref() {
            "page" => page = parse_count("page", value)?,
            "size" => size = Some(parse_count("size", value)?),
            "sort" => sort.push(parse_sort(value)?),
            _ => {}
        }
    }

    Ok(PageRequest {
        page,
        size: config.page_size(size),
        sort,
    })
}

/// Splits `<field>.<condition>` on the last dot.
fn split_key(key: &str) -> Result<(&str, Op)> {
    let (field, condition) = key
        .rsplit_once('.')
        .filter(|(field, condition)| !field.is_empty() && !condition.is_empty())
        .ok_or_else(|| CriteriaError::MalformedParameter(key.to_string()))?;

    let op = condition
        .parse::<Op>()
        .map_err(|_| CriteriaError::UnknownCondition {
            field: field.to_string(),
            condition: condition.to_string(),
        })?;
    Ok((field, op))
}

fn parse_distinct(value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CriteriaError::InvalidLiteral {
            field: "distinct".to_string(),
            condition: "equals",
            value: value.to_string(),
            reason: "expected 'true' or 'false'".to_string(),
        }),
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| CriteriaError::InvalidPage {
            name,
            value: value.to_string(),
        })
}

/// Parses `<field>[,asc|desc]`.
fn parse_sort(value: &str) -> Result<OrderBy> {
    let invalid = || CriteriaError::InvalidSort(value.to_string());
    let mut parts = value.split(',').map(str::trim);

    let field = parts.next().filter(|f| !f.is_empty()).ok_or_else(invalid)?;
    let dir = match parts.next() {
        None => Dir::Asc,
        Some(dir) => Dir::parse(dir).ok_or_else(invalid)?,
    };
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(OrderBy::new(field, dir))
}
