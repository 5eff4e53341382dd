/// Default page size when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Date,
    Modified,
    Title,
    Relevance,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Date => "date",
            OrderBy::Modified => "modified",
            OrderBy::Title => "title",
            OrderBy::Relevance => "relevance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Parameters for an article listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub categories: Vec<u64>,
    pub search: Option<String>,
    pub orderby: OrderBy,
    pub order: Order,
}

impl ArticleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn categories(mut self, categories: Vec<u64>) -> Self {
        self.categories = categories;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn orderby(mut self, orderby: OrderBy) -> Self {
        self.orderby = orderby;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// The category filter as a canonical comma-joined string: sorted and
    /// deduplicated, so the same id set always yields the same value.
    /// Returns None when no filter is set.
    pub fn categories_param(&self) -> Option<String> {
        if self.categories.is_empty() {
            return None;
        }

        let mut ids = self.categories.clone();
        ids.sort_unstable();
        ids.dedup();

        Some(
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Wire parameters for the posts endpoint, defaults applied.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        params.push(("per_page".to_string(), per_page.to_string()));

        if let Some(categories) = self.categories_param() {
            params.push(("categories".to_string(), categories));
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search".to_string(), search.to_string()));
        }

        params.push(("orderby".to_string(), self.orderby.as_str().to_string()));
        params.push(("order".to_string(), self.order.as_str().to_string()));

        params
    }

    /// Serialized value the article-list hook compares to decide whether a
    /// refetch is due. Covers page, page size, search and the category set;
    /// sort changes alone do not trigger a refetch.
    pub fn change_key(&self) -> String {
        serde_json::json!([
            self.page,
            self.per_page,
            self.search,
            self.categories_param()
        ])
        .to_string()
    }
}
