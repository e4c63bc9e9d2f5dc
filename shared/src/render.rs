//! Pure projection from a post's block sequence to sanitized markup.
//!
//! This is the authoritative rendering policy for both the reader page and
//! the admin live preview. Failures stay contained: an unsafe URL drops the
//! element it belongs to, an unknown block renders to nothing, and nothing
//! in here can fail a whole page.

use crate::block::{Block, VideoProvider};
use crate::legacy;
use crate::post::Post;
use crate::sanitize::{escape_html, safe_url, vimeo_embed, youtube_embed};

/// Optional text fields count as present only when non-empty after trim,
/// matching the truthiness semantics of the persisted document.
fn opt_text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one post body: blocks when the post has them, otherwise the
/// legacy plain-line content, otherwise nothing.
pub fn render_post_body(post: &Post) -> String {
    if !post.blocks.is_empty() {
        render_blocks(&post.blocks)
    } else if let Some(lines) = &post.content {
        legacy::render_content(lines)
    } else {
        String::new()
    }
}

pub fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
        Block::Heading { text } => format!("<h2>{}</h2>", escape_html(text)),
        Block::List { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!("<ul>{}</ul>", items)
        },
        Block::Quote { text, by } => {
            let by = opt_text(by)
                .map(|by| format!("<div class=\"quote-by\">— {}</div>", escape_html(by)))
                .unwrap_or_default();
            format!(
                "<blockquote class=\"quote\"><div>{}</div>{}</blockquote>",
                escape_html(text),
                by
            )
        },
        Block::Callout { kind, title, text } => {
            let title = opt_text(title)
                .map(|title| format!("<div class=\"callout-title\">{}</div>", escape_html(title)))
                .unwrap_or_default();
            let text = if text.trim().is_empty() {
                String::new()
            } else {
                format!("<div class=\"callout-text\">{}</div>", escape_html(text))
            };
            format!(
                "<div class=\"callout callout-{}\">{}{}</div>",
                kind.as_str(),
                title,
                text
            )
        },
        Block::Image { url, alt, caption } => {
            let Some(src) = safe_url(url) else {
                return String::new();
            };
            let caption = opt_text(caption)
                .map(|caption| format!("<div class=\"img-cap\">{}</div>", escape_html(caption)))
                .unwrap_or_default();
            let alt = escape_html(opt_text(alt).unwrap_or_default());
            format!(
                "<figure class=\"img\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\" />{}</figure>",
                src, alt, caption
            )
        },
        Block::Sources { items } => {
            let items: String = items
                .iter()
                .filter_map(|item| {
                    let href = safe_url(&item.url)?;
                    let label = if item.label.trim().is_empty() {
                        escape_html(&href)
                    } else {
                        escape_html(&item.label)
                    };
                    Some(format!(
                        "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
                        href, label
                    ))
                })
                .collect();
            format!(
                "<div class=\"sources\"><h3>Sources</h3><ul>{}</ul></div>",
                items
            )
        },
        Block::Video {
            provider,
            url,
            title,
            caption,
        } => {
            let Some(url) = safe_url(url) else {
                return String::new();
            };

            let embed = match provider {
                VideoProvider::Youtube => youtube_embed(&url),
                VideoProvider::Vimeo => vimeo_embed(&url),
                // Providers without an embed form always get the link button.
                VideoProvider::Rumble | VideoProvider::Odysee => None,
            };

            let title_html = opt_text(title)
                .map(|title| format!("<div class=\"vid-title\">{}</div>", escape_html(title)))
                .unwrap_or_default();
            let caption_html = opt_text(caption)
                .map(|caption| format!("<div class=\"vid-cap\">{}</div>", escape_html(caption)))
                .unwrap_or_default();

            match embed {
                Some(embed) => {
                    let iframe_title = escape_html(opt_text(title).unwrap_or("Video"));
                    format!(
                        "<div class=\"video-wrap\">{}<div class=\"video\">\
                         <iframe src=\"{}\" title=\"{}\" frameborder=\"0\" \
                         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; \
                         gyroscope; picture-in-picture; web-share\" \
                         allowfullscreen></iframe></div>{}</div>",
                        title_html, embed, iframe_title, caption_html
                    )
                },
                // No embed (rumble, odysee, underivable id): a plain watch
                // button instead of a broken frame.
                None => format!(
                    "<div class=\"video-wrap\">{}<div class=\"video-card\">\
                     <a class=\"button secondary\" href=\"{}\" target=\"_blank\" \
                     rel=\"noopener\">Watch video</a></div>{}</div>",
                    title_html, url, caption_html
                ),
            }
        },
        Block::Unknown => String::new(),
    }
}
