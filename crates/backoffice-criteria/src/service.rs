//! Criteria-driven query entry points.

use std::marker::PhantomData;

use tracing::debug;

use crate::criteria::Criteria;
use crate::page::{Page, PageRequest};
use crate::repository::Repository;
use crate::specification::create_specification;

/// Read-only query service for one entity type.
///
/// Compiles criteria with [`create_specification`] and hands the result to
/// its repository. Repository errors are returned unchanged.
#[derive(Debug, Clone)]
pub struct QueryService<E, R> {
    repository: R,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R: Repository<E>> QueryService<E, R> {
    pub fn new(repository: R) -> Self {
        QueryService {
            repository,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the requested page of entities matching `criteria`.
    pub fn find_by_criteria<C>(
        &self,
        criteria: Option<&C>,
        page: &PageRequest,
    ) -> Result<Page<E>, R::Error>
    where
        C: Criteria<Entity = E>,
    {
        debug!(
            criteria = %DisplayCriteria(criteria),
            page = page.page,
            size = page.size,
            "find by criteria"
        );
        let spec = create_specification(criteria);
        self.repository.find_all(&spec, page)
    }

    /// Counts the entities matching `criteria`.
    pub fn count_by_criteria<C>(&self, criteria: Option<&C>) -> Result<u64, R::Error>
    where
        C: Criteria<Entity = E>,
    {
        debug!(criteria = %DisplayCriteria(criteria), "count by criteria");
        let spec = create_specification(criteria);
        self.repository.count(&spec)
    }
}

struct DisplayCriteria<'a, C>(Option<&'a C>);

impl<C: Criteria> std::fmt::Display for DisplayCriteria<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(criteria) => write!(f, "{criteria}"),
            None => f.write_str("none"),
        }
    }
}
