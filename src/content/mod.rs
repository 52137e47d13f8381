//! Content module - articles, photos, and loading them from the source directory

mod date;
mod frontmatter;
mod item;
pub mod loader;

pub use date::ContentDate;
pub use frontmatter::FrontMatter;
pub use item::{Article, ContentItem, ContentKind, ContentSet, Photo};
