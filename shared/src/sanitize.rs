//! Validation and escaping of untrusted strings before they reach markup.
//!
//! None of these functions fail for malformed input. "Unrenderable" is
//! signalled with `None`, and callers drop the field instead of aborting
//! the render.

use url::Url;

/// Accept a URL only when its scheme is exactly `https`. Returns the
/// normalized absolute form so downstream markup never sees the raw input.
pub fn safe_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    if parsed.scheme() != "https" {
        return None;
    }
    Some(parsed.to_string())
}

/// Escape the HTML-significant characters so free text can be placed in
/// element content or attribute values without constructing markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Derive the embed URL for a YouTube watch link. The id comes from the
/// `youtu.be` short path or the `v` query parameter on the long domain.
pub fn youtube_embed(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let mut id = String::new();
    if host == "youtu.be" {
        id = parsed.path().trim_start_matches('/').to_string();
    }
    if id.is_empty() && host.contains("youtube.com") {
        id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
    }
    if id.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.youtube.com/embed/{}",
        urlencoding::encode(&id)
    ))
}

/// Derive the embed URL for a Vimeo link. The first path segment must be
/// all digits.
pub fn vimeo_embed(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let id = parsed.path_segments()?.find(|part| !part.is_empty())?;
    if !id.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(format!("https://player.vimeo.com/video/{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_url_requires_https() {
        assert_eq!(
            safe_url("https://example.com/a"),
            Some("https://example.com/a".to_string())
        );
        assert_eq!(safe_url("http://example.com/a"), None);
        assert_eq!(safe_url("javascript:alert(1)"), None);
        assert_eq!(safe_url("not a url"), None);
        assert_eq!(safe_url(""), None);
    }

    #[test]
    fn escape_html_covers_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn youtube_embed_handles_both_link_forms() {
        assert_eq!(
            youtube_embed("https://youtu.be/abc123"),
            Some("https://www.youtube.com/embed/abc123".to_string())
        );
        assert_eq!(
            youtube_embed("https://www.youtube.com/watch?v=abc123"),
            Some("https://www.youtube.com/embed/abc123".to_string())
        );
        assert_eq!(youtube_embed("https://youtube.com/watch"), None);
        assert_eq!(youtube_embed("https://example.com/watch?v=abc"), None);
        assert_eq!(youtube_embed("nonsense"), None);
    }

    #[test]
    fn vimeo_embed_requires_numeric_id() {
        assert_eq!(
            vimeo_embed("https://vimeo.com/12345"),
            Some("https://player.vimeo.com/video/12345".to_string())
        );
        assert_eq!(vimeo_embed("https://vimeo.com/abc"), None);
        assert_eq!(vimeo_embed("https://vimeo.com/"), None);
    }
}
