use tracing::warn;

use crate::domain::Article;
use crate::errors::NewsResult;
use crate::hooks::Liveness;
use crate::sources::query::ArticleQuery;
use crate::sources::traits::ContentSource;

/// Parameters driving the article-list hook. `enabled == false` gates all
/// fetching without clearing previous state.
#[derive(Debug, Clone)]
pub struct ArticleListParams {
    pub query: ArticleQuery,
    pub enabled: bool,
}

impl Default for ArticleListParams {
    fn default() -> Self {
        Self::new(ArticleQuery::default())
    }
}

impl ArticleListParams {
    pub fn new(query: ArticleQuery) -> Self {
        Self {
            query,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Tracks one article listing: re-fetches when the query's change key moves,
/// resets the list to empty on failure, and discards outcomes that land
/// after teardown.
pub struct ArticleListHook<S: ContentSource> {
    source: S,
    params: ArticleListParams,
    fetched_key: Option<String>,
    articles: Vec<Article>,
    loading: bool,
    error: Option<String>,
    alive: Liveness,
}

impl<S: ContentSource> ArticleListHook<S> {
    pub fn new(source: S, params: ArticleListParams) -> Self {
        Self {
            source,
            params,
            fetched_key: None,
            articles: Vec::new(),
            loading: true,
            error: None,
            alive: Liveness::new(),
        }
    }

    /// Fetch if one is due: the hook is enabled and the current params
    /// differ from the last fetched ones. A disabled hook never fetches.
    pub fn poll(&mut self) {
        if !self.params.enabled {
            return;
        }

        let key = self.params.query.change_key();
        if self.fetched_key.as_deref() == Some(key.as_str()) {
            return;
        }

        self.fetched_key = Some(key);
        self.run_fetch();
    }

    /// Replace the parameters and poll. Changes to page, page size, search
    /// or the category set count as a change; re-enabling a disabled hook
    /// refetches even when the query is unchanged.
    pub fn set_params(&mut self, params: ArticleListParams) {
        if params.enabled && !self.params.enabled {
            self.fetched_key = None;
        }
        self.params = params;
        self.poll();
    }

    /// Coarse manual reload: drop all state, including the change key, and
    /// fetch from scratch.
    pub fn refetch(&mut self) {
        self.articles.clear();
        self.error = None;
        self.fetched_key = None;
        self.loading = true;
        self.poll();
    }

    fn run_fetch(&mut self) {
        self.loading = true;
        self.error = None;

        let outcome = self.source.list_articles(&self.params.query);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: NewsResult<Vec<Article>>) {
        if !self.alive.is_alive() {
            return;
        }

        match outcome {
            Ok(articles) => {
                self.articles = articles;
            }
            Err(e) => {
                warn!(error = %e, "article list fetch failed");
                self.error = Some(e.to_string());
                self.articles.clear();
            }
        }

        self.loading = false;
    }

    pub fn teardown(&mut self) {
        self.alive.teardown();
    }

    /// Handle for tearing the hook down from outside its owner.
    pub fn liveness(&self) -> Liveness {
        self.alive.clone()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
