use serde::{Deserialize, Serialize};

/// One typed unit of post content.
///
/// The wire shape is the tagged object of the persisted document
/// (`{"type": "p", "text": "..."}` etc.). A tag we do not know about
/// deserializes to [`Block::Unknown`] instead of failing the whole
/// document, and renders to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    #[serde(rename = "p")]
    Paragraph {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "h2")]
    Heading {
        #[serde(default)]
        text: String,
    },
    List {
        #[serde(default)]
        items: Vec<String>,
    },
    Quote {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        by: Option<String>,
    },
    Callout {
        #[serde(default)]
        kind: CalloutKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        text: String,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Video {
        #[serde(default)]
        provider: VideoProvider,
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Sources {
        #[serde(default)]
        items: Vec<SourceItem>,
    },
    #[serde(other)]
    Unknown,
}

impl Block {
    /// Minimally valid default instance for a kind, so the editor never
    /// operates on an under-specified block.
    pub fn empty(kind: BlockKind) -> Block {
        match kind {
            BlockKind::Paragraph => Block::Paragraph {
                text: String::new(),
            },
            BlockKind::Heading => Block::Heading {
                text: String::new(),
            },
            BlockKind::List => Block::List {
                items: vec![String::new()],
            },
            BlockKind::Quote => Block::Quote {
                text: String::new(),
                by: None,
            },
            BlockKind::Callout => Block::Callout {
                kind: CalloutKind::Note,
                title: None,
                text: String::new(),
            },
            BlockKind::Image => Block::Image {
                url: "https://".to_string(),
                alt: None,
                caption: None,
            },
            BlockKind::Video => Block::Video {
                provider: VideoProvider::Youtube,
                url: String::new(),
                title: None,
                caption: None,
            },
            BlockKind::Sources => Block::Sources {
                items: vec![SourceItem {
                    label: String::new(),
                    url: "https://".to_string(),
                }],
            },
        }
    }

    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Block::Paragraph { .. } => Some(BlockKind::Paragraph),
            Block::Heading { .. } => Some(BlockKind::Heading),
            Block::List { .. } => Some(BlockKind::List),
            Block::Quote { .. } => Some(BlockKind::Quote),
            Block::Callout { .. } => Some(BlockKind::Callout),
            Block::Image { .. } => Some(BlockKind::Image),
            Block::Video { .. } => Some(BlockKind::Video),
            Block::Sources { .. } => Some(BlockKind::Sources),
            Block::Unknown => None,
        }
    }

    /// Short tag shown in the editor's block header.
    pub fn tag(&self) -> &'static str {
        self.kind().map(BlockKind::key).unwrap_or("?")
    }
}

/// Discriminant-only view of [`Block`], used by the add-block picker and
/// the default-instance factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    List,
    Quote,
    Callout,
    Image,
    Video,
    Sources,
}

impl BlockKind {
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::List,
        BlockKind::Quote,
        BlockKind::Callout,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Sources,
    ];

    /// Wire name of the kind, matching the document's `type` tag.
    pub fn key(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading => "h2",
            BlockKind::List => "list",
            BlockKind::Quote => "quote",
            BlockKind::Callout => "callout",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Sources => "sources",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Heading => "Heading",
            BlockKind::List => "List",
            BlockKind::Quote => "Quote",
            BlockKind::Callout => "Callout",
            BlockKind::Image => "Image",
            BlockKind::Video => "Video",
            BlockKind::Sources => "Sources",
        }
    }

    pub fn from_key(key: &str) -> Option<BlockKind> {
        BlockKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Note,
    Hot,
}

impl CalloutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CalloutKind::Note => "note",
            CalloutKind::Hot => "hot",
        }
    }

    pub fn from_key(key: &str) -> CalloutKind {
        match key {
            "hot" => CalloutKind::Hot,
            _ => CalloutKind::Note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    #[default]
    Youtube,
    Vimeo,
    Rumble,
    Odysee,
}

impl VideoProvider {
    pub const ALL: [VideoProvider; 4] = [
        VideoProvider::Youtube,
        VideoProvider::Vimeo,
        VideoProvider::Rumble,
        VideoProvider::Odysee,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoProvider::Youtube => "youtube",
            VideoProvider::Vimeo => "vimeo",
            VideoProvider::Rumble => "rumble",
            VideoProvider::Odysee => "odysee",
        }
    }

    /// Label for the editor's provider select. Providers without embed
    /// support are marked so authors know what to expect.
    pub fn label(self) -> &'static str {
        match self {
            VideoProvider::Youtube => "YouTube",
            VideoProvider::Vimeo => "Vimeo",
            VideoProvider::Rumble => "Rumble (link button)",
            VideoProvider::Odysee => "Odysee (link button)",
        }
    }

    pub fn from_key(key: &str) -> VideoProvider {
        match key {
            "vimeo" => VideoProvider::Vimeo,
            "rumble" => VideoProvider::Rumble,
            "odysee" => VideoProvider::Odysee,
            _ => VideoProvider::Youtube,
        }
    }
}

/// One entry of a `sources` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_deserialize_from_document_tags() {
        let raw = r#"[
            {"type": "p", "text": "hello"},
            {"type": "h2", "text": "section"},
            {"type": "list", "items": ["a", "b"]},
            {"type": "video", "provider": "vimeo", "url": "https://vimeo.com/1"}
        ]"#;
        let blocks: Vec<Block> = serde_json::from_str(raw).expect("parse blocks");
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                text: "hello".to_string()
            }
        );
        assert_eq!(
            blocks[1],
            Block::Heading {
                text: "section".to_string()
            }
        );
        assert_eq!(blocks[2].kind(), Some(BlockKind::List));
        match &blocks[3] {
            Block::Video {
                provider, title, ..
            } => {
                assert_eq!(*provider, VideoProvider::Vimeo);
                assert!(title.is_none());
            },
            other => panic!("expected video, got {:?}", other),
        }
    }

    #[test]
    fn unknown_kind_is_tolerated() {
        let raw = r#"{"type": "poll", "question": "?"}"#;
        let block: Block = serde_json::from_str(raw).expect("parse unknown block");
        assert_eq!(block, Block::Unknown);
        assert_eq!(block.kind(), None);
    }

    #[test]
    fn empty_instances_are_minimally_valid() {
        match Block::empty(BlockKind::List) {
            Block::List { items } => assert_eq!(items, vec![String::new()]),
            other => panic!("expected list, got {:?}", other),
        }
        match Block::empty(BlockKind::Sources) {
            Block::Sources { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].url, "https://");
            },
            other => panic!("expected sources, got {:?}", other),
        }
        match Block::empty(BlockKind::Video) {
            Block::Video { provider, .. } => assert_eq!(provider, VideoProvider::Youtube),
            other => panic!("expected video, got {:?}", other),
        }
    }

    #[test]
    fn optional_fields_stay_absent_on_export() {
        let block = Block::Quote {
            text: "quoted".to_string(),
            by: None,
        };
        let raw = serde_json::to_string(&block).expect("serialize quote");
        assert!(!raw.contains("\"by\""));

        let kinds: Vec<&str> = BlockKind::ALL.iter().map(|kind| kind.key()).collect();
        assert_eq!(
            kinds,
            vec!["p", "h2", "list", "quote", "callout", "image", "video", "sources"]
        );
    }
}
