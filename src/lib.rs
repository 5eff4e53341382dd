//! Data core for the ComMarília news portal: a WordPress REST adapter that
//! normalizes remote posts and categories into flat article shapes, plus
//! stateful fetch hooks tracking loading/error/result for a presentation
//! layer.

pub mod config;
pub mod domain;
pub mod errors;
pub mod hooks;
pub mod share;
pub mod sources;

pub use config::Config;
pub use domain::{Article, Category};
pub use errors::{NewsError, NewsResult};
