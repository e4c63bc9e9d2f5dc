use serde::{Deserialize, Serialize};

use crate::block::Block;

/// One post of the document. The `slug` is the stable external identifier
/// used for reader deep links; everything else is presentation data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    /// `YYYY-MM-DD`, so plain string comparison sorts chronologically.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Legacy plain-line body kept for posts authored before the block
    /// model. Exclusive alternative to `blocks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
}

impl Post {
    /// Case-insensitive substring match over the searchable fields. An
    /// empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = normalize(query);
        if query.is_empty() {
            return true;
        }
        let haystack = normalize(&format!(
            "{} {} {} {} {}",
            self.title,
            self.slug,
            self.tags.join(" "),
            self.excerpt,
            self.content.as_deref().unwrap_or_default().join(" ")
        ));
        haystack.contains(&query)
    }
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reduce arbitrary text to a URL-safe slug: lowercase, quotes dropped,
/// every other non-alphanumeric run collapsed to a single `-`, trimmed,
/// at most 80 characters.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::new();
    for ch in raw.trim().to_lowercase().chars() {
        if ch == '\'' || ch == '"' {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').chars().take(80).collect()
}

/// Split a comma-separated tags field into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the editable comma-separated form.
pub fn tags_to_field(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_normalizes_to_url_safe_form() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  It's \"Quoted\"  "), "its-quoted");
        assert_eq!(slugify("a--b__c"), "a-b-c");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");

        let long = "x".repeat(200);
        assert_eq!(slugify(&long).len(), 80);

        let slug = slugify("Ünïcode Äccents");
        assert!(slug.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-'));
    }

    #[test]
    fn parse_tags_trims_and_filters_empty() {
        assert_eq!(
            parse_tags(" rust, wasm, ,blog ,,"),
            vec!["rust".to_string(), "wasm".to_string(), "blog".to_string()]
        );
        assert!(parse_tags("").is_empty());
        assert_eq!(tags_to_field(&parse_tags("a,b")), "a, b");
    }

    #[test]
    fn matches_searches_all_fields() {
        let post = Post {
            title: "Zig vs Rust".to_string(),
            slug: "zig-vs-rust".to_string(),
            tags: vec!["systems".to_string()],
            excerpt: "a comparison".to_string(),
            content: Some(vec!["legacy body line".to_string()]),
            ..Post::default()
        };
        assert!(post.matches(""));
        assert!(post.matches("ZIG"));
        assert!(post.matches("systems"));
        assert!(post.matches("comparison"));
        assert!(post.matches("legacy body"));
        assert!(!post.matches("python"));
    }

    #[test]
    fn legacy_content_is_omitted_when_absent() {
        let post = Post {
            title: "t".to_string(),
            ..Post::default()
        };
        let raw = serde_json::to_string(&post).expect("serialize post");
        assert!(!raw.contains("\"content\""));
    }
}
