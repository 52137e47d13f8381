//! Built-in Tripper theme templates using Tera template engine
//!
//! Templates and the stylesheet are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::feed::HomeFeed;

/// Stylesheet written to `css/style.css`
pub const STYLESHEET: &str = include_str!("tripper/style.css");

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Escaping is done per value with `html_text` so URLs keep their slashes
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("tripper/layout.html")),
            ("index.html", include_str!("tripper/index.html")),
            (
                "partials/head.html",
                include_str!("tripper/partials/head.html"),
            ),
            (
                "partials/footer.html",
                include_str!("tripper/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("html_text", html_text_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the home page
    pub fn render_home(&self, config: &SiteConfig, feed: &HomeFeed) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::from(config));
        context.insert("home", &config.home);
        context.insert("footer", &config.footer);
        context.insert("posts", &feed.posts);
        context.insert("album", &feed.album);
        self.render("index.html", &context)
    }
}

/// Escape text for HTML bodies and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Tera filter: escape HTML special characters
fn html_text_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("html_text", "value", String, value);
    Ok(tera::Value::String(escape_html(&s)))
}

/// Site fields exposed to templates
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub author: String,
    pub email: String,
    pub avatar: String,
    pub language: String,
    pub share_image: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            tagline: config.tagline.clone(),
            author: config.author.clone(),
            email: config.email.clone(),
            avatar: config.avatar.clone(),
            language: config.language.clone(),
            share_image: config.share_image(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DisplayRecord;

    fn record(id: &str, title: &str, category_label: &str) -> DisplayRecord {
        DisplayRecord {
            identifier: id.to_string(),
            href: format!("/post/{}", id),
            display_title: title.to_string(),
            display_date: "2023-06-01".to_string(),
            cover_url: format!("https://tripper.press/api/og?title={}", title),
            category_label: category_label.to_string(),
            excerpt_text: String::new(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
        assert_eq!(escape_html("https://x/y"), "https://x/y");
    }

    #[test]
    fn test_render_home_sections() {
        let renderer = TemplateRenderer::new().unwrap();
        let feed = HomeFeed {
            posts: vec![record("sunset", "Sunset", " · Travel")],
            album: Vec::new(),
        };
        let html = renderer.render_home(&SiteConfig::default(), &feed).unwrap();

        assert!(html.contains("<title>按下瞬间 - Tripper Press</title>"));
        assert!(html.contains(r#"href="/post/sunset""#));
        assert!(html.contains("2023-06-01 · Travel"));
        assert!(html.contains("All Essays"));
        assert!(html.contains("All Portfolio"));
        assert!(html.contains("mailto:aiokr@outlook.com"));
        assert!(html.contains("&copy; Tripper Press 2016-2023"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let feed = HomeFeed {
            posts: vec![record("x", "<script>", "")],
            album: Vec::new(),
        };
        let html = renderer.render_home(&SiteConfig::default(), &feed).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_share_image_uses_amp_entity() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_home(&SiteConfig::default(), &HomeFeed::default())
            .unwrap();
        assert!(html.contains("?title=按下瞬间&amp;subtitle="));
    }
}
