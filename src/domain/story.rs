use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::Article;

/// How long a story frame stays on screen before auto-advancing. The caller
/// owns the timer; this module only models the cursor.
pub const STORY_AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Name of the leading rail that collects the most recent articles.
const LATEST_RAIL_NAME: &str = "Últimas";

/// How many articles the leading rail shows.
const LATEST_RAIL_LEN: usize = 3;

/// One story rail: a short-form presentation of a group of articles, fronted
/// by the first article's image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub articles: Vec<Article>,
}

/// Group a fetched article list into story rails: a leading rail with the
/// first few articles, then one rail per distinct category in first-seen
/// order.
pub fn build_stories(articles: &[Article]) -> Vec<Story> {
    let mut stories = Vec::new();

    if articles.is_empty() {
        return stories;
    }

    let latest: Vec<Article> = articles.iter().take(LATEST_RAIL_LEN).cloned().collect();
    stories.push(Story {
        id: rail_id(LATEST_RAIL_NAME),
        name: LATEST_RAIL_NAME.to_string(),
        icon: latest[0].image.clone(),
        articles: latest,
    });

    for article in articles {
        let existing = stories
            .iter()
            .skip(1)
            .position(|s| s.name == article.category);

        match existing {
            Some(pos) => stories[pos + 1].articles.push(article.clone()),
            None => stories.push(Story {
                id: rail_id(&article.category),
                name: article.category.clone(),
                icon: article.image.clone(),
                articles: vec![article.clone()],
            }),
        }
    }

    stories
}

/// Lowercased, hyphen-separated identifier derived from a rail name.
fn rail_id(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_whitespace() {
                '-'
            } else {
                c.to_lowercase().next().unwrap_or(c)
            }
        })
        .collect()
}

/// Cursor over one story's articles. Advancing past the last frame finishes
/// the story; a finished player reports no current frame.
#[derive(Debug, Clone)]
pub struct StoryPlayer {
    story: Story,
    index: usize,
    finished: bool,
}

impl StoryPlayer {
    pub fn new(story: Story) -> Self {
        Self {
            story,
            index: 0,
            finished: false,
        }
    }

    pub fn current(&self) -> Option<&Article> {
        if self.finished {
            return None;
        }
        self.story.articles.get(self.index)
    }

    /// Advance to the next frame. Returns false when the story finished.
    pub fn next(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.index + 1 < self.story.articles.len() {
            self.index += 1;
            true
        } else {
            self.finished = true;
            false
        }
    }

    /// Step back one frame; no-op on the first frame.
    pub fn prev(&mut self) {
        if !self.finished && self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_articles() -> Vec<Article> {
        vec![
            Article::new("1", "A").with_category("Economia").with_image("a.jpg"),
            Article::new("2", "B").with_category("Luto").with_image("b.jpg"),
            Article::new("3", "C").with_category("Economia").with_image("c.jpg"),
            Article::new("4", "D").with_category("Cidade").with_image("d.jpg"),
        ]
    }

    #[test]
    fn test_build_stories_leading_rail() {
        let stories = build_stories(&sample_articles());

        assert_eq!(stories[0].name, "Últimas");
        assert_eq!(stories[0].id, "últimas");
        assert_eq!(stories[0].articles.len(), 3);
        assert_eq!(stories[0].icon, "a.jpg");
    }

    #[test]
    fn test_build_stories_groups_by_category_first_seen() {
        let stories = build_stories(&sample_articles());

        let names: Vec<&str> = stories.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Últimas", "Economia", "Luto", "Cidade"]);

        let economia = &stories[1];
        assert_eq!(economia.articles.len(), 2);
        assert_eq!(economia.icon, "a.jpg");
    }

    #[test]
    fn test_build_stories_empty_input() {
        assert!(build_stories(&[]).is_empty());
    }

    #[test]
    fn test_rail_id_hyphenates() {
        assert_eq!(rail_id("Mercado Livre"), "mercado-livre");
    }

    #[test]
    fn test_player_advances_and_finishes() {
        let stories = build_stories(&sample_articles());
        let mut player = StoryPlayer::new(stories[1].clone());

        assert_eq!(player.current().map(|a| a.id.as_str()), Some("1"));
        assert!(player.next());
        assert_eq!(player.current().map(|a| a.id.as_str()), Some("3"));
        assert!(!player.next());
        assert!(player.is_finished());
        assert!(player.current().is_none());
    }

    #[test]
    fn test_player_prev_stops_at_start() {
        let stories = build_stories(&sample_articles());
        let mut player = StoryPlayer::new(stories[0].clone());

        player.prev();
        assert_eq!(player.current().map(|a| a.id.as_str()), Some("1"));
        player.next();
        player.prev();
        assert_eq!(player.current().map(|a| a.id.as_str()), Some("1"));
    }
}
