use serde::{Deserialize, Serialize};

/// A normalized news article. Records are recreated on every fetch; there is
/// no identity beyond the fetch's own array and no update-in-place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Plain text, all markup stripped.
    pub excerpt: String,
    /// Rich markup exactly as delivered by the remote. Run through
    /// [`Article::sanitized_content`] before rendering as HTML.
    pub content: String,
    /// URL of the featured image, or empty when none was embedded.
    pub image: String,
    pub category: String,
    pub date: String,
    pub author: String,
    pub slug: String,
    pub link: String,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            image: String::new(),
            category: String::new(),
            date: String::new(),
            author: String::new(),
            slug: String::new(),
            link: String::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// The article body with scripts, event handlers and other active
    /// markup removed. The remote source is not fully trusted, so this is
    /// the only form that should be rendered as HTML.
    pub fn sanitized_content(&self) -> String {
        ammonia::clean(&self.content)
    }
}
