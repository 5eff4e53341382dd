pub mod article;
pub mod category;
pub mod story;

pub use article::Article;
pub use category::Category;
pub use story::{build_stories, Story, StoryPlayer};
