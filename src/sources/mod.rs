pub mod mock;
pub mod query;
pub mod traits;
pub mod wordpress;

pub use mock::MockSource;
pub use query::{ArticleQuery, Order, OrderBy};
pub use traits::ContentSource;
pub use wordpress::WordPressClient;
