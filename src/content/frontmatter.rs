//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Accept either a single category or a list, keeping the first entry
fn first_of_string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct FirstString;

    impl<'de> Visitor<'de> for FirstString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let first = seq.next_element::<String>()?;
            while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
            Ok(first)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FirstString)
}

/// Front-matter of an article or photo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    /// Slug override; the file stem is used otherwise
    pub url: Option<String>,
    pub cover: Option<String>,
    #[serde(
        alias = "categories",
        deserialize_with = "first_of_string_or_vec",
        default
    )]
    pub category: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            url: None,
            cover: None,
            category: None,
            excerpt: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse<'a>(content: &'a str, path: &str) -> Result<(Self, &'a str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content, path);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content, path);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml<'a>(content: &'a str, path: &str) -> Result<(Self, &'a str)> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content).map_err(|e| {
            Error::FrontMatter {
                path: path.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok((fm, remaining))
    }

    fn parse_json<'a>(content: &'a str, path: &str) -> Result<(Self, &'a str)> {
        let json_err = |message: String| Error::FrontMatter {
            path: path.to_string(),
            message,
        };

        // JSON front-matter fenced by ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest
                .find(";;;")
                .ok_or_else(|| json_err("missing closing ;;;".to_string()))?;
            let fm: FrontMatter =
                serde_json::from_str(&rest[..end_pos]).map_err(|e| json_err(e.to_string()))?;
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
            return Ok((fm, remaining));
        }

        // Bare JSON object at the start
        let mut depth = 0;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return Err(json_err("unterminated JSON object".to_string()));
        }

        let fm: FrontMatter =
            serde_json::from_str(&content[..end_pos]).map_err(|e| json_err(e.to_string()))?;
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
        Ok((fm, remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: 海边的日落
date: 2023-06-01
url: sunset
category: Travel
excerpt: A walk along the shore.
---

Body text.
"#;

        let (fm, remaining) = FrontMatter::parse(content, "sunset.md").unwrap();
        assert_eq!(fm.title.as_deref(), Some("海边的日落"));
        assert_eq!(fm.date.as_deref(), Some("2023-06-01"));
        assert_eq!(fm.url.as_deref(), Some("sunset"));
        assert_eq!(fm.category.as_deref(), Some("Travel"));
        assert_eq!(fm.excerpt.as_deref(), Some("A walk along the shore."));
        assert!(fm.published);
        assert!(remaining.contains("Body text."));
    }

    #[test]
    fn test_categories_list_keeps_first() {
        let content = "---\ntitle: T\ncategories:\n  - Notes\n  - Life\n---\n";
        let (fm, _) = FrontMatter::parse(content, "t.md").unwrap();
        assert_eq!(fm.category.as_deref(), Some("Notes"));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Harbour", "cover": "https://img/harbour.jpg"}

Caption.
"#;

        let (fm, remaining) = FrontMatter::parse(content, "harbour.md").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Harbour"));
        assert_eq!(fm.cover.as_deref(), Some("https://img/harbour.jpg"));
        assert!(remaining.contains("Caption."));
    }

    #[test]
    fn test_fenced_json_frontmatter() {
        let content = ";;;\n{\"title\": \"Fenced\", \"published\": false}\n;;;\nBody";
        let (fm, remaining) = FrontMatter::parse(content, "fenced.md").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Fenced"));
        assert!(!fm.published);
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("Just text.", "plain.md").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, "Just text.");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let err = FrontMatter::parse(content, "bad.md").unwrap_err();
        assert!(err.to_string().contains("bad.md"));
    }
}
