//! Create a new article or photo

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentKind;
use crate::Press;

#[derive(Serialize)]
struct ArticleScaffold<'a> {
    title: &'a str,
    date: &'a str,
    category: Option<&'a str>,
    excerpt: Option<&'a str>,
}

#[derive(Serialize)]
struct PhotoScaffold<'a> {
    title: &'a str,
    date: &'a str,
    cover: Option<&'a str>,
}

/// Create a content file with front-matter dated now
pub fn create(press: &Press, title: &str, kind: ContentKind) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let target_dir = match kind {
        ContentKind::Article => press.source_dir.join(&press.config.posts_dir),
        ContentKind::Photo => press.source_dir.join(&press.config.photos_dir),
    };
    fs::create_dir_all(&target_dir)?;

    let mut slug = slug::slugify(title);
    if slug.is_empty() {
        // Titles without any latin characters slugify to nothing
        slug = now.format("%Y%m%d%H%M%S").to_string();
    }
    let file_path = target_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let date = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let front_matter = match kind {
        ContentKind::Article => serde_yaml::to_string(&ArticleScaffold {
            title,
            date: &date,
            category: None,
            excerpt: None,
        })?,
        ContentKind::Photo => serde_yaml::to_string(&PhotoScaffold {
            title,
            date: &date,
            cover: None,
        })?,
    };

    fs::write(&file_path, format!("---\n{}---\n", front_matter))?;
    println!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_new_article_is_loadable() {
        let dir = TempDir::new().unwrap();
        let press = Press::new(dir.path()).unwrap();

        let path = create(&press, "Slow Days", ContentKind::Article).unwrap();
        assert!(path.ends_with("_posts/slow-days.md"));

        let posts = ContentLoader::new(&press).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Slow Days");
        assert_eq!(posts[0].category, None);
    }

    #[test]
    fn test_titles_with_yaml_syntax_survive() {
        let dir = TempDir::new().unwrap();
        let press = Press::new(dir.path()).unwrap();

        let titles = ["Day one: arrival", "[draft] notes", "#1 sunrise", "\"quoted\" & 'single'"];
        for title in titles {
            create(&press, title, ContentKind::Article).unwrap();
        }

        let posts = ContentLoader::new(&press).load_posts().unwrap();
        assert_eq!(posts.len(), titles.len());
        for title in titles {
            assert!(
                posts.iter().any(|p| p.title == title),
                "missing {:?}",
                title
            );
        }
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let press = Press::new(dir.path()).unwrap();

        create(&press, "Harbour", ContentKind::Photo).unwrap();
        assert!(create(&press, "Harbour", ContentKind::Photo).is_err());
    }
}
