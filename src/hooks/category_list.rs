use tracing::warn;

use crate::domain::Category;
use crate::errors::NewsResult;
use crate::hooks::Liveness;
use crate::sources::traits::ContentSource;

/// Tracks the category listing. Fetches once per mount; later polls are
/// no-ops.
pub struct CategoryListHook<S: ContentSource> {
    source: S,
    fetched: bool,
    categories: Vec<Category>,
    loading: bool,
    error: Option<String>,
    alive: Liveness,
}

impl<S: ContentSource> CategoryListHook<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fetched: false,
            categories: Vec::new(),
            loading: true,
            error: None,
            alive: Liveness::new(),
        }
    }

    pub fn poll(&mut self) {
        if self.fetched {
            return;
        }
        self.fetched = true;

        self.loading = true;
        self.error = None;

        let outcome = self.source.list_categories();
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: NewsResult<Vec<Category>>) {
        if !self.alive.is_alive() {
            return;
        }

        match outcome {
            Ok(categories) => {
                self.categories = categories;
            }
            Err(e) => {
                warn!(error = %e, "category list fetch failed");
                self.error = Some(e.to_string());
                self.categories.clear();
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

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NewsError;
    use crate::sources::traits::MockContentSource;

    #[test]
    fn test_fetches_once_per_mount() {
        let mut source = MockContentSource::new();
        source
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new(1, "Economia", "economia", 3)]));

        let mut hook = CategoryListHook::new(source);
        hook.poll();
        hook.poll();

        assert_eq!(hook.categories().len(), 1);
        assert!(!hook.loading());
    }

    #[test]
    fn test_error_resets_categories() {
        let mut source = MockContentSource::new();
        source.expect_list_categories().times(1).returning(|| {
            Err(NewsError::Remote {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })
        });

        let mut hook = CategoryListHook::new(source);
        hook.poll();

        assert!(!hook.loading());
        assert!(hook.error().unwrap().contains("500"));
        assert!(hook.categories().is_empty());
    }

    #[test]
    fn test_teardown_freezes_state() {
        let mut source = MockContentSource::new();
        source
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new(1, "Economia", "economia", 3)]));

        let mut hook = CategoryListHook::new(source);
        hook.teardown();
        hook.poll();

        assert!(hook.categories().is_empty());
        assert!(hook.loading());
    }
}
