//! Generator module - writes the home page and site assets

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::content::loader::is_content_file;
use crate::content::ContentSet;
use crate::feed::{HomeFeed, Presenter};
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Press;

/// Static site generator using Tera templates
pub struct Generator {
    press: Press,
    renderer: TemplateRenderer,
    presenter: Presenter,
}

impl Generator {
    /// Create a new generator
    pub fn new(press: &Press) -> Result<Self> {
        Ok(Self {
            press: press.clone(),
            renderer: TemplateRenderer::new()?,
            presenter: Presenter::new(&press.config.og_endpoint),
        })
    }

    /// Generate the entire site from a content snapshot
    pub fn generate(&self, content: &ContentSet) -> Result<()> {
        let feed = HomeFeed::build(content, &self.press.config.home, &self.presenter)?;
        tracing::debug!(
            "Home feed has {} essays and {} photos",
            feed.posts.len(),
            feed.album.len()
        );

        fs::create_dir_all(&self.press.public_dir)?;

        let html = self.renderer.render_home(&self.press.config, &feed)?;
        let index_path = self.press.public_dir.join("index.html");
        fs::write(&index_path, html)?;
        tracing::debug!("Generated: {:?}", index_path);

        let css_dir = self.press.public_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("style.css"), STYLESHEET)?;

        self.copy_source_assets()?;

        Ok(())
    }

    /// Copy source assets (images, etc.) to public directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.press.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_content_file(path) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;

            // Content directories hold nothing but content
            let in_hidden_dir = relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('_'))
                    .unwrap_or(false)
            });
            if in_hidden_dir {
                continue;
            }

            let dest = self.press.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            tracing::debug!("Copied asset {:?}", relative);
        }

        Ok(())
    }
}
