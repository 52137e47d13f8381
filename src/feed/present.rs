//! Deriving display fields from content items

use serde::Serialize;

use crate::content::ContentItem;
use crate::error::Result;

/// Image endpoint used for items without a cover
pub const DEFAULT_PLACEHOLDER: &str = "https://tripper.press/api/og";

/// Everything a view needs to show one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub identifier: String,
    pub href: String,
    pub display_title: String,
    pub display_date: String,
    pub cover_url: String,
    pub category_label: String,
    pub excerpt_text: String,
}

/// Maps content items to display records
#[derive(Debug, Clone)]
pub struct Presenter {
    placeholder_base: String,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Presenter {
    pub fn new(placeholder_base: &str) -> Self {
        Self {
            placeholder_base: placeholder_base.to_string(),
        }
    }

    pub fn present<T: ContentItem + ?Sized>(&self, item: &T) -> Result<DisplayRecord> {
        let display_date = item.parsed_date()?.ymd();
        let display_title = item.title().to_string();

        let cover_url = match item.cover() {
            Some(cover) => cover.to_string(),
            None => self.placeholder_url(&display_title),
        };

        let category_label = match item.category() {
            Some(category) => format!(" · {}", category),
            None => String::new(),
        };

        Ok(DisplayRecord {
            identifier: item.identifier().to_string(),
            href: format!("{}{}", item.kind().route_prefix(), item.identifier()),
            display_title,
            display_date,
            cover_url,
            category_label,
            excerpt_text: item.excerpt().unwrap_or_default().to_string(),
        })
    }

    /// Generated cover image keyed by title
    pub fn placeholder_url(&self, title: &str) -> String {
        format!("{}?title={}", self.placeholder_base, title)
    }
}

/// Present an item with the default placeholder endpoint
pub fn present<T: ContentItem + ?Sized>(item: &T) -> Result<DisplayRecord> {
    Presenter::default().present(item)
}
