//! Public gallery cache and category filtering.
//!
//! The cache is replaced wholesale by every successful fetch and never
//! mutated by filtering: a filter only derives a borrowed view of it.

use crate::model::category::Category;
use crate::model::work::Work;

/// Label of the implicit filter that shows every work.
pub const ALL_LABEL: &str = "Tous";

/// Which works the public gallery is currently restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(u32),
}

impl Filter {
    pub fn matches(self, work: &Work) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(id) => work.category_id == id,
        }
    }
}

/// One button of the filter bar.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterChoice<'a> {
    pub filter: Filter,
    pub label: &'a str,
}

/// Builds the filter bar: the "all" choice first, then one choice per
/// category in server order.
pub fn filter_choices(categories: &[Category]) -> Vec<FilterChoice<'_>> {
    std::iter::once(FilterChoice {
        filter: Filter::All,
        label: ALL_LABEL,
    })
    .chain(categories.iter().map(|category| FilterChoice {
        filter: Filter::Category(category.id),
        label: category.name.as_str(),
    }))
    .collect()
}

/// In-memory copy of the last successful `GET /works`.
///
/// Each refresh takes a ticket from [`WorkCache::begin_refresh`]. A response
/// is applied only if its ticket is newer than the one already applied, so a
/// slow response can never overwrite the result of a later refresh.
#[derive(Debug, Default)]
pub struct WorkCache {
    works: Vec<Work>,
    issued: u64,
    applied: u64,
}

impl WorkCache {
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replaces the cached list. Returns `false` when the response is stale.
    pub fn apply(&mut self, ticket: u64, works: Vec<Work>) -> bool {
        if ticket <= self.applied {
            return false;
        }
        self.applied = ticket;
        self.works = works;
        true
    }

    /// Whether a failure for `ticket` is still worth reporting.
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Work> + '_ {
        self.works.iter().filter(move |work| filter.matches(work))
    }
}
