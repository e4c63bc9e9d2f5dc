//! In-memory collection of posts backed by the single JSON document.

use std::collections::BTreeSet;

use anyhow::{Context, Result};

use crate::post::{normalize, Post};

/// Ordered post collection, populated once per page load from `posts.json`
/// (reader) or from the document, an import, or a local draft (admin).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostStore {
    pub posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> PostStore {
        PostStore { posts }
    }

    pub fn from_json(raw: &str) -> Result<PostStore> {
        let posts: Vec<Post> =
            serde_json::from_str(raw).context("posts document must be a JSON array of posts")?;
        tracing::debug!(count = posts.len(), "loaded posts document");
        Ok(PostStore { posts })
    }

    /// Serialize the document for export: pretty JSON, posts sorted by
    /// date descending (newest first). The in-memory order is untouched.
    pub fn export_json(&self) -> Result<String> {
        let mut sorted = self.posts.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        serde_json::to_string_pretty(&sorted).context("serialize posts document")
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// All tags across the store, deduplicated and sorted.
    pub fn unique_tags(&self) -> Vec<String> {
        self.posts
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Indices of posts matching a free-text query, in store order. Used
    /// by the admin list pane, which addresses posts by index.
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        self.posts
            .iter()
            .enumerate()
            .filter(|(_, post)| post.matches(query))
            .map(|(index, _)| index)
            .collect()
    }

    /// Reader list view: free-text query plus required tags, sorted by
    /// date (newest first unless `oldest_first`).
    pub fn filtered(&self, query: &str, required_tags: &[String], oldest_first: bool) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| post.matches(query))
            .filter(|post| {
                required_tags.iter().all(|required| {
                    post.tags
                        .iter()
                        .any(|tag| normalize(tag) == normalize(required))
                })
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            if oldest_first {
                a.date.cmp(&b.date)
            } else {
                b.date.cmp(&a.date)
            }
        });
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PostStore {
        PostStore::new(vec![
            Post {
                title: "Older".to_string(),
                slug: "older".to_string(),
                date: "2023-05-05".to_string(),
                tags: vec!["history".to_string()],
                ..Post::default()
            },
            Post {
                title: "Newer".to_string(),
                slug: "newer".to_string(),
                date: "2024-01-01".to_string(),
                tags: vec!["rust".to_string(), "history".to_string()],
                ..Post::default()
            },
        ])
    }

    #[test]
    fn from_json_rejects_non_array_documents() {
        let err = PostStore::from_json("{\"not\": \"an array\"}")
            .expect_err("object documents must fail");
        assert!(err.to_string().contains("JSON array"));

        let store = PostStore::from_json("[]").expect("empty array is valid");
        assert!(store.posts.is_empty());
    }

    #[test]
    fn export_sorts_newest_first_without_reordering_the_store() {
        let store = store();
        let exported = store.export_json().expect("export");
        let newer = exported.find("\"newer\"").expect("newer present");
        let older = exported.find("\"older\"").expect("older present");
        assert!(newer < older, "2024 post must serialize before 2023 post");
        // store order untouched
        assert_eq!(store.posts[0].slug, "older");
    }

    #[test]
    fn export_round_trips_through_from_json() {
        let store = store();
        let exported = store.export_json().expect("export");
        let reloaded = PostStore::from_json(&exported).expect("reload");
        assert_eq!(reloaded.posts.len(), 2);
        assert_eq!(reloaded.posts[0].slug, "newer");
    }

    #[test]
    fn find_by_slug_is_exact_match() {
        let store = store();
        assert_eq!(store.find_by_slug("newer").map(|p| p.title.as_str()), Some("Newer"));
        assert!(store.find_by_slug("new").is_none());
        assert!(store.find_by_slug("").is_none());
    }

    #[test]
    fn unique_tags_are_sorted_and_deduplicated() {
        assert_eq!(
            store().unique_tags(),
            vec!["history".to_string(), "rust".to_string()]
        );
    }

    #[test]
    fn filter_indices_keeps_store_order() {
        let store = store();
        assert_eq!(store.filter_indices(""), vec![0, 1]);
        assert_eq!(store.filter_indices("newer"), vec![1]);
        assert!(store.filter_indices("missing").is_empty());
    }

    #[test]
    fn filtered_applies_query_tags_and_sort() {
        let store = store();
        let newest_first = store.filtered("", &[], false);
        assert_eq!(newest_first[0].slug, "newer");

        let oldest_first = store.filtered("", &[], true);
        assert_eq!(oldest_first[0].slug, "older");

        let tagged = store.filtered("", &["rust".to_string()], false);
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].slug, "newer");

        let both = store.filtered("older", &["history".to_string()], false);
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].slug, "older");
    }
}
