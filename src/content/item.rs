//! Article and Photo models

use serde::{Deserialize, Serialize};

use super::ContentDate;
use crate::error::{Error, Result};

/// Which collection an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Photo,
}

impl ContentKind {
    /// Route prefix used when linking to a single item
    pub fn route_prefix(&self) -> &'static str {
        match self {
            ContentKind::Article => "/post/",
            ContentKind::Photo => "/album/",
        }
    }
}

/// Shape shared by every publishable unit of content
pub trait ContentItem {
    /// Unique stable key, also used as the URL slug
    fn identifier(&self) -> &str;

    /// Raw date string as authored
    fn date(&self) -> &str;

    fn title(&self) -> &str;

    fn cover(&self) -> Option<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn excerpt(&self) -> Option<&str> {
        None
    }

    fn kind(&self) -> ContentKind;

    /// Parse the raw date
    fn parsed_date(&self) -> Result<ContentDate> {
        ContentDate::parse(self.date()).ok_or_else(|| Error::DateParse {
            identifier: self.identifier().to_string(),
            value: self.date().to_string(),
        })
    }
}

impl<T: ContentItem + ?Sized> ContentItem for &T {
    fn identifier(&self) -> &str {
        (**self).identifier()
    }

    fn date(&self) -> &str {
        (**self).date()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn cover(&self) -> Option<&str> {
        (**self).cover()
    }

    fn category(&self) -> Option<&str> {
        (**self).category()
    }

    fn excerpt(&self) -> Option<&str> {
        (**self).excerpt()
    }

    fn kind(&self) -> ContentKind {
        (**self).kind()
    }
}

/// A blog essay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// URL slug
    pub identifier: String,

    /// Publication date (raw)
    pub date: String,

    pub title: String,

    /// Cover image; a generated placeholder is used when absent
    pub cover: Option<String>,

    pub category: Option<String>,

    /// Short summary shown on listings
    pub excerpt: Option<String>,

    /// Source file path (relative to the source dir)
    pub source: String,
}

impl Article {
    /// Create an article with only the required fields
    pub fn new(identifier: &str, date: &str, title: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            date: date.to_string(),
            title: title.to_string(),
            cover: None,
            category: None,
            excerpt: None,
            source: String::new(),
        }
    }
}

impl ContentItem for Article {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Article
    }
}

/// A gallery entry; always carries a cover image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub identifier: String,
    pub date: String,
    pub title: String,
    pub cover: String,
    pub source: String,
}

impl Photo {
    pub fn new(identifier: &str, date: &str, title: &str, cover: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            date: date.to_string(),
            title: title.to_string(),
            cover: cover.to_string(),
            source: String::new(),
        }
    }
}

impl ContentItem for Photo {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn cover(&self) -> Option<&str> {
        Some(&self.cover)
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Photo
    }
}

/// Read-only snapshot of all loaded content
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub posts: Vec<Article>,
    pub photos: Vec<Photo>,
}

impl ContentSet {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.photos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_date_error_names_item() {
        let article = Article::new("broken", "sometime in june", "Broken");
        match article.parsed_date() {
            Err(Error::DateParse { identifier, value }) => {
                assert_eq!(identifier, "broken");
                assert_eq!(value, "sometime in june");
            }
            other => panic!("expected DateParse, got {:?}", other),
        }
    }

    #[test]
    fn test_photo_always_has_cover() {
        let photo = Photo::new("sea", "2023-01-01", "Sea", "https://img/sea.jpg");
        assert_eq!(photo.cover(), Some("https://img/sea.jpg"));
        assert_eq!(photo.category(), None);
        assert_eq!(photo.kind().route_prefix(), "/album/");
    }

    #[test]
    fn test_reference_delegates() {
        let article = Article::new("a", "2023-01-01", "A");
        let by_ref = &article;
        assert_eq!(by_ref.identifier(), "a");
        assert_eq!(by_ref.kind(), ContentKind::Article);
    }
}
