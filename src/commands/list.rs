//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::ContentItem;
use crate::feed::{select, DisplayRecord, Presenter};
use crate::Press;

/// List site content by type, newest first
pub fn run(press: &Press, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(press);
    let presenter = Presenter::new(&press.config.og_endpoint);

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            let records = newest_first(&posts, &presenter)?;
            println!("Posts ({}):", records.len());
            for record in records {
                println!(
                    "  {} - {}{} [{}]",
                    record.display_date,
                    record.display_title,
                    record.category_label,
                    record.identifier
                );
            }
        }
        "photo" | "photos" => {
            let photos = loader.load_photos()?;
            let records = newest_first(&photos, &presenter)?;
            println!("Photos ({}):", records.len());
            for record in records {
                println!(
                    "  {} - {} [{}]",
                    record.display_date, record.display_title, record.identifier
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, photo",
                content_type
            );
        }
    }

    Ok(())
}

/// Every item of a collection as display records, newest first
pub fn newest_first<T: ContentItem>(items: &[T], presenter: &Presenter) -> Result<Vec<DisplayRecord>> {
    let mut records = Vec::with_capacity(items.len());
    for item in select(items, items.len())? {
        records.push(presenter.present(item)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Photo;
    use tempfile::TempDir;

    #[test]
    fn test_newest_first_keeps_everything() {
        let photos = vec![
            Photo::new("a", "2021-01-01", "A", "a.jpg"),
            Photo::new("b", "2023-01-01", "B", "b.jpg"),
            Photo::new("c", "2022-01-01", "C", "c.jpg"),
        ];

        let records = newest_first(&photos, &Presenter::default()).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_unknown_type() {
        let dir = TempDir::new().unwrap();
        let press = Press::new(dir.path()).unwrap();
        assert!(run(&press, "tag").is_err());
        assert!(run(&press, "post").is_ok());
    }
}
