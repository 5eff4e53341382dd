//! Stateful fetch wrappers over a [`ContentSource`]. Each hook owns its
//! state slice exclusively: loading flag, error message and the last result.
//! Errors are caught here, logged, and surfaced as message strings; they
//! never reach the caller as `Err`.
//!
//! [`ContentSource`]: crate::sources::ContentSource

pub mod article_list;
pub mod category_list;
pub mod selections;
pub mod single_article;

pub use article_list::{ArticleListHook, ArticleListParams};
pub use category_list::CategoryListHook;
pub use selections::Selections;
pub use single_article::ArticleHook;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable teardown flag shared between a hook and whatever owns its
/// lifecycle. Once torn down, any in-flight fetch outcome is discarded
/// instead of mutating hook state. This does not abort the request itself.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn teardown(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
