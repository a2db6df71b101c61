//! Paging requests and results.

use crate::error::{CriteriaError, Result};
use crate::ordering::{Dir, OrderBy};

/// Requested page: zero-based page number, page size and sort order.
///
/// # Example
///
/// ```
/// use backoffice_criteria::{OrderBy, PageRequest};
///
/// let request = PageRequest::of(2, 20).with_sort(OrderBy::desc("issueDate"));
/// assert_eq!(request.offset(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Vec<OrderBy>,
}

impl PageRequest {
    /// Page `page` of `size` rows, unsorted.
    pub fn of(page: usize, size: usize) -> Self {
        PageRequest {
            page,
            size,
            sort: Vec::new(),
        }
    }

    /// Appends a sort key. Earlier keys take precedence.
    pub fn with_sort(mut self, order: OrderBy) -> Self {
        self.sort.push(order);
        self
    }

    pub fn sort_by(self, field: impl Into<String>, dir: Dir) -> Self {
        self.with_sort(OrderBy::new(field, dir))
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Rejects sort keys that are not in `fields`.
    ///
    /// A repository compares an unknown field as absent on every row, which
    /// leaves the rows in their unsorted order. Use this with a criteria
    /// type's `FIELD_NAMES` to turn that into a [`CriteriaError::InvalidSort`].
    pub fn validate_sort(&self, fields: &[&str]) -> Result<()> {
        match self
            .sort
            .iter()
            .find(|order| !fields.contains(&order.field.as_str()))
        {
            Some(order) => Err(CriteriaError::InvalidSort(order.to_string())),
            None => Ok(()),
        }
    }

    /// The following page with the same size and sort.
    pub fn next(&self) -> Self {
        PageRequest {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }
}

/// One page of matched entities plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub content: Vec<E>,
    pub total_elements: u64,
    pub page: usize,
    pub size: usize,
}

impl<E> Page<E> {
    pub fn new(content: Vec<E>, request: &PageRequest, total_elements: u64) -> Self {
        Page {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }

    /// Number of pages needed to hold every match. Zero-sized pages report 0.
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size as u64)
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn has_next(&self) -> bool {
        (self.page as u64).saturating_add(1) < self.total_pages()
    }

    /// Transforms the content, keeping the paging metadata.
    pub fn map<U, F: FnMut(E) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        }
    }
}
