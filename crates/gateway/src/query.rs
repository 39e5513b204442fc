//! Request options and the paged response envelope.

/// Pagination, sort, and relationship-filter options for a list request.
/// Sort entries use the collaborator's `field,direction` spelling and may
/// repeat.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
    pub filter: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }

    /// Relationship filter understood by the collaborator, e.g.
    /// `athlete-is-null` for unattached session packages.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        for sort in &self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(filter) = &self.filter {
            params.push(("filter", filter.clone()));
        }
        params
    }
}

/// Free-text search request against the `_search` endpoint.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub options: QueryOptions,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", self.query.clone())];
        params.extend(self.options.params());
        params
    }
}

/// One page of results. The total row count comes from the collaborator's
/// `X-Total-Count` response header and is absent when the header is.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
