//! Content loader - loads articles and photos from the source directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Article, ContentSet, FrontMatter, Photo};
use crate::error::Error;
use crate::Press;

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    press: &'a Press,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(press: &'a Press) -> Self {
        Self { press }
    }

    /// Load both collections
    pub fn load(&self) -> Result<ContentSet> {
        Ok(ContentSet {
            posts: self.load_posts()?,
            photos: self.load_photos()?,
        })
    }

    /// Load all articles from source/_posts
    pub fn load_posts(&self) -> Result<Vec<Article>> {
        let posts_dir = self.press.source_dir.join(&self.press.config.posts_dir);
        let mut posts = Vec::new();

        for path in content_files(&posts_dir) {
            match self.load_article(&path) {
                Ok(Some(article)) => posts.push(article),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        Ok(posts)
    }

    /// Load all photos from source/_photos
    pub fn load_photos(&self) -> Result<Vec<Photo>> {
        let photos_dir = self.press.source_dir.join(&self.press.config.photos_dir);
        let mut photos = Vec::new();

        for path in content_files(&photos_dir) {
            match self.load_photo(&path) {
                Ok(Some(photo)) => photos.push(photo),
                Ok(None) => tracing::debug!("Skipping unpublished photo {:?}", path),
                Err(e) => tracing::warn!("Failed to load photo {:?}: {}", path, e),
            }
        }

        Ok(photos)
    }

    fn load_article(&self, path: &Path) -> Result<Option<Article>> {
        let Some(entry) = self.read_entry(path)? else {
            return Ok(None);
        };

        Ok(Some(Article {
            identifier: entry.identifier,
            date: entry.date,
            title: entry.title,
            cover: entry.fm.cover,
            category: entry.fm.category,
            excerpt: entry.fm.excerpt,
            source: entry.source,
        }))
    }

    fn load_photo(&self, path: &Path) -> Result<Option<Photo>> {
        let Some(entry) = self.read_entry(path)? else {
            return Ok(None);
        };

        let cover = entry.fm.cover.ok_or_else(|| Error::MissingCover {
            identifier: entry.identifier.clone(),
        })?;

        Ok(Some(Photo {
            identifier: entry.identifier,
            date: entry.date,
            title: entry.title,
            cover,
            source: entry.source,
        }))
    }

    /// Read the fields shared by both collections
    fn read_entry(&self, path: &Path) -> Result<Option<Entry>> {
        let source = path
            .strip_prefix(&self.press.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let content = fs::read_to_string(path)?;
        let (mut fm, _body) = FrontMatter::parse(&content, &source)?;

        if !fm.published && !self.press.config.render_drafts {
            return Ok(None);
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let date = fm
            .date
            .take()
            .ok_or_else(|| anyhow::anyhow!("missing date in {}", source))?;

        let identifier = fm.url.take().unwrap_or_else(|| stem.clone());
        let title = fm.title.take().unwrap_or(stem);

        Ok(Some(Entry {
            identifier,
            date,
            title,
            source,
            fm,
        }))
    }
}

struct Entry {
    identifier: String,
    date: String,
    title: String,
    source: String,
    fm: FrontMatter,
}

/// Markdown files under `dir`, sorted by file name
fn content_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_content_file(p))
        .collect()
}

/// Check if a file is a markdown file
pub fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "mdx")
        .unwrap_or(false)
}
