//! Editing state for the admin page.
//!
//! The session owns the post store and the selection; the UI applies every
//! mutation through it and recomputes the live preview from the result.
//! "No post selected" is an explicit state, not a sentinel index.

use anyhow::Result;

use crate::block::{Block, BlockKind};
use crate::post::Post;
use crate::render::render_post_body;
use crate::store::PostStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    pub store: PostStore,
    pub selected: Option<usize>,
}

impl EditorSession {
    pub fn new(store: PostStore) -> EditorSession {
        EditorSession {
            store,
            selected: None,
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.store.posts.len() {
            self.selected = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.store.posts.get(self.selected?)
    }

    pub fn selected_post_mut(&mut self) -> Option<&mut Post> {
        let index = self.selected?;
        self.store.posts.get_mut(index)
    }

    /// Append a blank post dated `date` (`YYYY-MM-DD`; the clock lives
    /// with the caller) and select it.
    pub fn new_post(&mut self, date: String) {
        self.store.posts.push(Post {
            date,
            ..Post::default()
        });
        self.selected = Some(self.store.posts.len() - 1);
    }

    /// Remove the selected post and clear the selection.
    pub fn delete_selected(&mut self) {
        if let Some(index) = self.selected.take() {
            if index < self.store.posts.len() {
                self.store.posts.remove(index);
            }
        }
    }

    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.selected_post_mut()?.blocks.get_mut(index)
    }

    /// Append a new default instance of `kind` to the selected post.
    pub fn add_block(&mut self, kind: BlockKind) {
        if let Some(post) = self.selected_post_mut() {
            post.blocks.push(Block::empty(kind));
        }
    }

    pub fn delete_block(&mut self, index: usize) {
        if let Some(post) = self.selected_post_mut() {
            if index < post.blocks.len() {
                post.blocks.remove(index);
            }
        }
    }

    /// Swap with the predecessor; no-op at index 0 or out of range.
    pub fn move_block_up(&mut self, index: usize) {
        if let Some(post) = self.selected_post_mut() {
            if index > 0 && index < post.blocks.len() {
                post.blocks.swap(index - 1, index);
            }
        }
    }

    /// Swap with the successor; no-op at the last index or out of range.
    pub fn move_block_down(&mut self, index: usize) {
        if let Some(post) = self.selected_post_mut() {
            if index + 1 < post.blocks.len() {
                post.blocks.swap(index, index + 1);
            }
        }
    }

    /// Markup for the live preview pane. Recomputed by the UI after every
    /// mutation; empty when nothing is selected.
    pub fn preview_html(&self) -> String {
        self.selected_post().map(render_post_body).unwrap_or_default()
    }

    /// Replace the whole session from an imported document. Selection is
    /// cleared because indices do not survive the swap.
    pub fn import_json(&mut self, raw: &str) -> Result<()> {
        let store = PostStore::from_json(raw)?;
        tracing::debug!(count = store.posts.len(), "replacing editor session");
        self.store = store;
        self.selected = None;
        Ok(())
    }

    pub fn export_json(&self) -> Result<String> {
        self.store.export_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_blocks(count: usize) -> EditorSession {
        let blocks = (0..count)
            .map(|i| Block::Paragraph {
                text: format!("b{}", i),
            })
            .collect();
        let mut session = EditorSession::new(PostStore::new(vec![Post {
            title: "post".to_string(),
            slug: "post".to_string(),
            blocks,
            ..Post::default()
        }]));
        session.select(0);
        session
    }

    fn block_texts(session: &EditorSession) -> Vec<String> {
        session
            .selected_post()
            .map(|post| {
                post.blocks
                    .iter()
                    .map(|block| match block {
                        Block::Paragraph { text } => text.clone(),
                        other => panic!("unexpected block {:?}", other),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn selection_is_explicit_and_bounded() {
        let mut session = session_with_blocks(1);
        session.select(5);
        assert_eq!(session.selected, Some(0), "out-of-range select is ignored");

        session.clear_selection();
        assert!(session.selected_post().is_none());
        assert_eq!(session.preview_html(), "");

        // structural ops without a selection are no-ops
        session.add_block(BlockKind::Paragraph);
        session.delete_block(0);
        session.move_block_up(1);
        assert_eq!(session.store.posts[0].blocks.len(), 1);
    }

    #[test]
    fn add_block_appends_default_instance() {
        let mut session = session_with_blocks(1);
        session.add_block(BlockKind::Video);
        let post = session.selected_post().expect("selected");
        assert_eq!(post.blocks.len(), 2);
        assert_eq!(post.blocks[1], Block::empty(BlockKind::Video));
    }

    #[test]
    fn delete_reduces_length_by_one() {
        let mut session = session_with_blocks(3);
        session.delete_block(1);
        assert_eq!(block_texts(&session), vec!["b0", "b2"]);

        session.delete_block(10);
        assert_eq!(session.selected_post().expect("selected").blocks.len(), 2);

        // deleting the last block leaves an empty sequence
        session.delete_block(1);
        session.delete_block(0);
        assert!(session.selected_post().expect("selected").blocks.is_empty());
    }

    #[test]
    fn move_up_at_zero_is_a_noop() {
        let mut session = session_with_blocks(3);
        session.move_block_up(0);
        assert_eq!(block_texts(&session), vec!["b0", "b1", "b2"]);

        session.move_block_up(2);
        assert_eq!(block_texts(&session), vec!["b0", "b2", "b1"]);
    }

    #[test]
    fn move_down_at_end_is_a_noop() {
        let mut session = session_with_blocks(3);
        session.move_block_down(2);
        assert_eq!(block_texts(&session), vec!["b0", "b1", "b2"]);

        session.move_block_down(0);
        assert_eq!(block_texts(&session), vec!["b1", "b0", "b2"]);
    }

    #[test]
    fn move_down_then_up_restores_order() {
        let mut session = session_with_blocks(4);
        let original = block_texts(&session);
        session.move_block_down(1);
        session.move_block_up(2);
        assert_eq!(block_texts(&session), original);
    }

    #[test]
    fn preview_tracks_every_mutation() {
        let mut session = session_with_blocks(1);
        assert_eq!(session.preview_html(), "<p>b0</p>");

        if let Some(Block::Paragraph { text }) = session.block_mut(0) {
            *text = "edited".to_string();
        }
        assert_eq!(session.preview_html(), "<p>edited</p>");

        session.add_block(BlockKind::Heading);
        assert_eq!(session.preview_html(), "<p>edited</p>\n<h2></h2>");
    }

    #[test]
    fn new_post_carries_the_supplied_date_and_selects_it() {
        let mut session = EditorSession::default();
        session.new_post("2024-06-01".to_string());
        assert_eq!(session.selected, Some(0));
        let post = session.selected_post().expect("selected");
        assert_eq!(post.date, "2024-06-01");
        assert!(post.title.is_empty());
        assert!(post.blocks.is_empty());
    }

    #[test]
    fn delete_selected_removes_post_and_clears_selection() {
        let mut session = session_with_blocks(1);
        session.delete_selected();
        assert!(session.store.posts.is_empty());
        assert_eq!(session.selected, None);

        // deleting again is harmless
        session.delete_selected();
        assert!(session.store.posts.is_empty());
    }

    #[test]
    fn import_replaces_posts_and_clears_selection() {
        let mut session = session_with_blocks(1);
        session
            .import_json(r#"[{"title": "imported", "slug": "imported", "date": "2024-01-01"}]"#)
            .expect("import");
        assert_eq!(session.selected, None);
        assert_eq!(session.store.posts[0].title, "imported");

        let err = session.import_json("{}").expect_err("object must fail");
        assert!(err.to_string().contains("JSON array"));
        // failed import leaves the session untouched
        assert_eq!(session.store.posts[0].title, "imported");
    }
}
