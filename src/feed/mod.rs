//! Home page feed - selecting recent content and mapping it for display

mod present;
mod select;

use serde::Serialize;

pub use present::{present, DisplayRecord, Presenter, DEFAULT_PLACEHOLDER};
pub use select::select;

use crate::config::HomeConfig;
use crate::content::{ContentItem, ContentSet};
use crate::error::Result;

/// The two ordered sequences shown on the home page
#[derive(Debug, Clone, Default, Serialize)]
pub struct HomeFeed {
    pub posts: Vec<DisplayRecord>,
    pub album: Vec<DisplayRecord>,
}

impl HomeFeed {
    /// Build the feed from a content snapshot
    pub fn build(content: &ContentSet, home: &HomeConfig, presenter: &Presenter) -> Result<Self> {
        Ok(Self {
            posts: present_all(select(&content.posts, home.post_limit)?, presenter)?,
            album: present_all(select(&content.photos, home.photo_limit)?, presenter)?,
        })
    }
}

fn present_all<T: ContentItem>(items: Vec<&T>, presenter: &Presenter) -> Result<Vec<DisplayRecord>> {
    items.into_iter().map(|item| presenter.present(item)).collect()
}
