use serde::Deserialize;

/// A `{ rendered: "..." }` wrapper as WordPress serializes titles, excerpts
/// and bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteMedia {
    pub id: u64,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub taxonomy: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAuthor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Auxiliary resources returned inline when `_embed=true` is requested.
/// Every list defaults to empty so a post without embeds still decodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<RemoteMedia>,
    /// Array of arrays: one inner array per taxonomy, categories first.
    #[serde(rename = "wp:term", default)]
    pub terms: Vec<Vec<RemoteTerm>>,
    #[serde(default)]
    pub author: Vec<RemoteAuthor>,
}

impl Embedded {
    /// Head-or-default accessors make the first-match-wins fallback policy
    /// explicit and testable in isolation.
    pub fn featured_image(&self) -> Option<&RemoteMedia> {
        self.featured_media.first()
    }

    /// Terms of the first taxonomy (categories on a stock install).
    pub fn primary_terms(&self) -> &[RemoteTerm] {
        self.terms.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn primary_author(&self) -> Option<&RemoteAuthor> {
        self.author.first()
    }
}

/// An unmodified remote post record. Read-only; discarded after
/// transformation into [`crate::domain::Article`].
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePost {
    pub id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(rename = "_embedded", default)]
    pub embedded: Embedded,
}

/// An unmodified remote category record.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCategory {
    pub id: u64,
    #[serde(default)]
    pub count: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent: u64,
}
