use tracing::warn;

use crate::domain::Article;
use crate::errors::NewsResult;
use crate::hooks::Liveness;
use crate::sources::traits::ContentSource;

/// Tracks a single article by identifier. A `None` id never issues a
/// request; the article stays absent and loading stays false.
pub struct ArticleHook<S: ContentSource> {
    source: S,
    id: Option<String>,
    fetched_id: Option<String>,
    article: Option<Article>,
    loading: bool,
    error: Option<String>,
    alive: Liveness,
}

impl<S: ContentSource> ArticleHook<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            id: None,
            fetched_id: None,
            article: None,
            loading: false,
            error: None,
            alive: Liveness::new(),
        }
    }

    /// Point the hook at an article id and poll. Passing the current id
    /// again is a no-op.
    pub fn set_id(&mut self, id: Option<&str>) {
        self.id = id.map(str::to_string);
        self.poll();
    }

    pub fn poll(&mut self) {
        let Some(id) = self.id.clone() else {
            return;
        };
        if self.fetched_id.as_deref() == Some(id.as_str()) {
            return;
        }
        self.fetched_id = Some(id.clone());

        self.loading = true;
        self.error = None;

        let outcome = self.source.get_article(&id);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: NewsResult<Article>) {
        if !self.alive.is_alive() {
            return;
        }

        match outcome {
            Ok(article) => {
                self.article = Some(article);
            }
            Err(e) => {
                warn!(error = %e, "article fetch failed");
                self.error = Some(e.to_string());
                self.article = None;
            }
        }

        self.loading = false;
    }

    pub fn teardown(&mut self) {
        self.alive.teardown();
    }

    pub fn liveness(&self) -> Liveness {
        self.alive.clone()
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
