//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Tripper Press configuration

# Site
title: 按下瞬间 - Tripper Press
subtitle: 衔枝筑巢，栽花种树。生活沉闷，前行有风。
tagline: Cherish the romantic universe and daily life.
description: ''
author: Sean
email: aiokr@outlook.com
avatar: https://imgur.lzmun.com/picgo/logo/tripper2colorfull.png_avatar
language: zh-CN

# URL
url: https://tripper.press
og_endpoint: https://tripper.press/api/og
og_image: ''

# Directory
source_dir: source
public_dir: public
posts_dir: _posts
photos_dir: _photos

# Writing
render_drafts: false

# Home page
home:
  post_limit: 3
  photo_limit: 8
  all_posts_path: /posts/1
  all_photos_path: /photo

# Footer
footer:
  site_name: Tripper Press
  credit: Design and Code by Sean
  credit_url: https://github.com/rimutuyuan1/Tripper-Next
  copyright_start: 2016
  copyright_end: 2023
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("source/_posts"))?;
    fs::create_dir_all(target_dir.join("source/_photos"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let today = chrono::Local::now().format("%Y-%m-%d");

    let sample_post = format!(
        r#"---
title: Hello World
date: {}
category: Notes
excerpt: The first essay on a new site.
---

Write something here.
"#,
        today
    );
    fs::write(target_dir.join("source/_posts/hello-world.md"), sample_post)?;

    let sample_photo = format!(
        r#"---
title: First Frame
date: {}
cover: https://imgur.lzmun.com/picgo/logo/tripper2colorfull.png_avatar
---
"#,
        today
    );
    fs::write(target_dir.join("source/_photos/first-frame.md"), sample_photo)?;

    tracing::debug!("Scaffolded site in {:?}", target_dir);

    Ok(())
}
