use html_escape::decode_html_entities;
use scraper::Html;

use crate::domain::{Article, Category};
use crate::sources::wordpress::types::{RemoteCategory, RemotePost};

/// Category shown when a post carries no taxonomy term.
pub const FALLBACK_CATEGORY: &str = "Notícias";

/// Byline shown when a post carries no embedded author.
pub const FALLBACK_AUTHOR: &str = "Redação";

/// Decode HTML entities into plain text, leaving everything else untouched.
pub fn decode_entities(text: &str) -> String {
    decode_html_entities(text).to_string()
}

/// Extract the visible text from an HTML fragment, dropping all tags and
/// collapsing whitespace.
pub fn strip_html(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(text_node) = node.value().as_text() {
            text.push_str(text_node);
        }
        // Space after block elements to preserve word boundaries
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "p" | "br" | "div" | "li" => text.push(' '),
                _ => {}
            }
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Flatten a remote post into the normalized article shape. Embedded
/// resources are read first-match-wins; missing ones fall back to the
/// portal defaults. The body is passed through verbatim.
pub fn transform_post(post: &RemotePost) -> Article {
    let image = post
        .embedded
        .featured_image()
        .map(|media| media.source_url.clone())
        .unwrap_or_default();

    let category = post
        .embedded
        .primary_terms()
        .first()
        .map(|term| term.name.clone())
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

    let author = post
        .embedded
        .primary_author()
        .map(|author| author.name.clone())
        .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());

    Article::new(post.id.to_string(), decode_entities(&post.title.rendered))
        .with_excerpt(strip_html(&post.excerpt.rendered))
        .with_content(post.content.rendered.clone())
        .with_image(image)
        .with_category(category)
        .with_date(post.date.clone())
        .with_author(author)
        .with_slug(post.slug.clone())
        .with_link(post.link.clone())
}

pub fn transform_category(category: &RemoteCategory) -> Category {
    Category::new(
        category.id,
        category.name.clone(),
        category.slug.clone(),
        category.count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_post() -> RemotePost {
        serde_json::from_str(
            r#"{
                "id": 42,
                "date": "2025-08-14T10:00:00",
                "slug": "mercado-livre",
                "link": "https://marilianoticia.com.br/mercado-livre",
                "title": {"rendered": "Caf&eacute; com leite"},
                "content": {"rendered": "<p><strong>MARÍLIA -</strong> corpo</p>"},
                "excerpt": {"rendered": "<p>Hello <b>world</b></p>"}
            }"#,
        )
        .unwrap()
    }

    fn embedded_post() -> RemotePost {
        serde_json::from_str(
            r#"{
                "id": 7,
                "date": "2025-08-13T20:00:00",
                "slug": "fabio-conte",
                "link": "https://marilianoticia.com.br/fabio-conte",
                "title": {"rendered": "Morre o jornalista F&aacute;bio Conte"},
                "content": {"rendered": "<p>corpo</p>"},
                "excerpt": {"rendered": "<p>resumo</p>"},
                "_embedded": {
                    "wp:featuredmedia": [{"id": 1, "source_url": "https://cdn.example/foto.jpg"}],
                    "wp:term": [[{"id": 2, "name": "Luto", "slug": "luto", "taxonomy": "category"}]],
                    "author": [{"id": 3, "name": "Fábio Conte"}]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_title_decodes_entities() {
        let article = transform_post(&bare_post());
        assert_eq!(article.title, "Café com leite");
    }

    #[test]
    fn test_excerpt_strips_tags() {
        let article = transform_post(&bare_post());
        assert_eq!(article.excerpt, "Hello world");
    }

    #[test]
    fn test_content_passes_through_verbatim() {
        let article = transform_post(&bare_post());
        assert_eq!(article.content, "<p><strong>MARÍLIA -</strong> corpo</p>");
    }

    #[test]
    fn test_missing_embedded_uses_fallbacks() {
        let article = transform_post(&bare_post());

        assert_eq!(article.image, "");
        assert_eq!(article.category, FALLBACK_CATEGORY);
        assert_eq!(article.author, FALLBACK_AUTHOR);
    }

    #[test]
    fn test_transform_is_idempotent_on_fallbacks() {
        let first = transform_post(&bare_post());
        let second = transform_post(&bare_post());
        assert_eq!(first, second);
    }

    #[test]
    fn test_embedded_resources_win_over_fallbacks() {
        let article = transform_post(&embedded_post());

        assert_eq!(article.image, "https://cdn.example/foto.jpg");
        assert_eq!(article.category, "Luto");
        assert_eq!(article.author, "Fábio Conte");
        assert_eq!(article.title, "Morre o jornalista Fábio Conte");
    }

    #[test]
    fn test_strip_html_nested_markup() {
        assert_eq!(
            strip_html("<div><p>First</p><p>Second <em>part</em></p></div>"),
            "First Second part"
        );
    }

    #[test]
    fn test_strip_html_decodes_entities_too() {
        assert_eq!(strip_html("<p>S&atilde;o Paulo</p>"), "São Paulo");
    }

    #[test]
    fn test_strip_html_plain_text_unchanged() {
        assert_eq!(strip_html("already plain"), "already plain");
    }

    #[test]
    fn test_strip_html_empty() {
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_decode_entities_mixed() {
        assert_eq!(
            decode_entities("A &amp; B &ndash; C"),
            "A & B \u{2013} C"
        );
    }

    #[test]
    fn test_transform_category() {
        let remote: RemoteCategory = serde_json::from_str(
            r#"{"id": 9, "count": 12, "name": "Trânsito", "slug": "transito"}"#,
        )
        .unwrap();

        let category = transform_category(&remote);
        assert_eq!(category, Category::new(9, "Trânsito", "transito", 12));
    }
}
