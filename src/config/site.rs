//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::feed::DEFAULT_PLACEHOLDER;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub avatar: String,
    pub language: String,

    // URL
    pub url: String,
    /// Endpoint rendering generated cover and share images
    pub og_endpoint: String,
    /// Explicit share image; derived from `og_endpoint` when empty
    pub og_image: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub posts_dir: String,
    pub photos_dir: String,

    // Writing
    pub render_drafts: bool,

    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub footer: FooterConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "按下瞬间 - Tripper Press".to_string(),
            subtitle: "衔枝筑巢，栽花种树。生活沉闷，前行有风。".to_string(),
            tagline: "Cherish the romantic universe and daily life.".to_string(),
            description: String::new(),
            author: "Sean".to_string(),
            email: "aiokr@outlook.com".to_string(),
            avatar: "https://imgur.lzmun.com/picgo/logo/tripper2colorfull.png_avatar".to_string(),
            language: "zh-CN".to_string(),

            url: "https://tripper.press".to_string(),
            og_endpoint: DEFAULT_PLACEHOLDER.to_string(),
            og_image: String::new(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            posts_dir: "_posts".to_string(),
            photos_dir: "_photos".to_string(),

            render_drafts: false,

            home: HomeConfig::default(),
            footer: FooterConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Share image for the home page
    pub fn share_image(&self) -> String {
        if self.og_image.is_empty() {
            let site_name = self
                .title
                .split(" - ")
                .next()
                .unwrap_or(&self.title);
            format!(
                "{}?title={}&subtitle={}",
                self.og_endpoint, site_name, self.subtitle
            )
        } else {
            self.og_image.clone()
        }
    }
}

/// Home page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Number of essays listed
    pub post_limit: usize,
    /// Number of photos in the portfolio grid
    pub photo_limit: usize,
    pub all_posts_path: String,
    pub all_photos_path: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            post_limit: 3,
            photo_limit: 8,
            all_posts_path: "/posts/1".to_string(),
            all_photos_path: "/photo".to_string(),
        }
    }
}

/// Footer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub site_name: String,
    pub logo_light: String,
    pub logo_dark: String,
    pub credit: String,
    pub credit_url: String,
    pub copyright_start: i32,
    pub copyright_end: i32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            site_name: "Tripper Press".to_string(),
            logo_light: "https://imgur.lzmun.com/picgo/logo/tripper2blackfull.png_avatar"
                .to_string(),
            logo_dark: "https://imgur.lzmun.com/picgo/logo/tripper2colorfull.png_avatar"
                .to_string(),
            credit: "Design and Code by Sean".to_string(),
            credit_url: "https://github.com/rimutuyuan1/Tripper-Next".to_string(),
            copyright_start: 2016,
            copyright_end: 2023,
        }
    }
}
