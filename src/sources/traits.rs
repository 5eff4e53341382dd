use crate::domain::{Article, Category};
use crate::errors::NewsResult;
use crate::sources::query::ArticleQuery;

/// A provider of normalized portal content. The remote WordPress install and
/// the static mock content both sit behind this seam.
#[cfg_attr(test, mockall::automock)]
pub trait ContentSource: Send + Sync {
    /// List articles matching the query, ordered by the query's sort.
    fn list_articles(&self, query: &ArticleQuery) -> NewsResult<Vec<Article>>;

    /// Fetch a single article by identifier.
    fn get_article(&self, id: &str) -> NewsResult<Article>;

    /// List categories, up to the source's page limit.
    fn list_categories(&self) -> NewsResult<Vec<Category>>;

    /// Fetch a single category by identifier.
    fn get_category(&self, id: u64) -> NewsResult<Category>;
}
