//! Filtering, sorting and pagination over a snapshot of celestial bodies.
//!
//! Everything here is a pure function of its inputs. The service layer hands
//! in the records it holds under lock and gets back cloned snapshots, so the
//! store itself is never mutated by a query.

use std::cmp::Ordering;

use crate::models::CelestialBody;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A list request: which page to return and how to narrow and order it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    /// Exact, case-sensitive status to keep. Empty means no filter.
    pub status: Option<String>,
    /// Field name to sort by, matched case-insensitively. Empty means no sort.
    pub sort_by: Option<String>,
    pub sort_ascending: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
            sort_by: None,
            sort_ascending: true,
        }
    }
}

impl ListQuery {
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = Some(field.into());
        self.sort_ascending = ascending;
        self
    }

    pub fn paged(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// The fields a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Gravity,
    Status,
}

impl SortKey {
    /// Resolves a caller-supplied field name.
    ///
    /// The name is normalized to an upper-case first letter followed by
    /// lower-case letters, so `"NAME"`, `"name"` and `"nAmE"` all resolve to
    /// [`SortKey::Name`]. Anything else is `None`.
    pub fn resolve(field: &str) -> Option<Self> {
        match normalize_field_name(field).as_str() {
            "Name" => Some(Self::Name),
            "Gravity" => Some(Self::Gravity),
            "Status" => Some(Self::Status),
            _ => None,
        }
    }

    pub fn compare(self, a: &CelestialBody, b: &CelestialBody) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Gravity => a.gravity.total_cmp(&b.gravity),
            Self::Status => a.status.cmp(&b.status),
        }
    }
}

fn normalize_field_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Runs filter, sort and paginate in that order and returns the page.
pub fn list(records: &[CelestialBody], query: &ListQuery) -> Vec<CelestialBody> {
    let mut matching = filter_by_status(records, query.status.as_deref());

    if let Some(field) = query.sort_by.as_deref().filter(|f| !f.is_empty()) {
        match SortKey::resolve(field) {
            Some(key) => sort(&mut matching, key, query.sort_ascending),
            None => tracing::debug!("Ignoring unknown sort field: {}", field),
        }
    }

    paginate(&matching, query.page, query.page_size)
        .iter()
        .map(|&body| body.clone())
        .collect()
}

/// Keeps bodies whose status equals `status` exactly, in their original order.
pub fn filter_by_status<'a>(
    records: &'a [CelestialBody],
    status: Option<&str>,
) -> Vec<&'a CelestialBody> {
    match status.filter(|s| !s.is_empty()) {
        Some(status) => records.iter().filter(|b| b.status == status).collect(),
        None => records.iter().collect(),
    }
}

/// Stable sort in either direction; equal keys keep their relative order.
pub fn sort(bodies: &mut [&CelestialBody], key: SortKey, ascending: bool) {
    if ascending {
        bodies.sort_by(|a, b| key.compare(a, b));
    } else {
        bodies.sort_by(|a, b| key.compare(b, a));
    }
}

/// Returns the `page`-th slice of `page_size` items. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
