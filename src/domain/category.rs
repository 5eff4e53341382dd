use serde::{Deserialize, Serialize};

/// A normalized taxonomy term grouping articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub count: u64,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>, count: u64) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            count,
        }
    }
}
