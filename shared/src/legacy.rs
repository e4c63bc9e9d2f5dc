//! Renderer for the plain-line post format that predates the block model.

use crate::sanitize::escape_html;

/// Render legacy content lines in a single left-to-right pass.
///
/// `## ` starts a heading, `- ` a list item (contiguous runs share one
/// `<ul>`), blank lines are dropped, everything else is a paragraph. A
/// heading, paragraph or blank line closes an open list; so does the end
/// of input.
pub fn render_content(lines: &[String]) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for line in lines {
        if let Some(rest) = line.strip_prefix("## ") {
            close_list(&mut out, &mut in_list);
            out.push_str("<h2>");
            out.push_str(&escape_html(rest));
            out.push_str("</h2>");
        } else if let Some(rest) = line.strip_prefix("- ") {
            if !in_list {
                out.push_str("<ul>");
                in_list = true;
            }
            out.push_str("<li>");
            out.push_str(&escape_html(rest));
            out.push_str("</li>");
        } else if line.trim().is_empty() {
            close_list(&mut out, &mut in_list);
        } else {
            close_list(&mut out, &mut in_list);
            out.push_str("<p>");
            out.push_str(&escape_html(line));
            out.push_str("</p>");
        }
    }

    close_list(&mut out, &mut in_list);
    out
}

fn close_list(out: &mut String, in_list: &mut bool) {
    if *in_list {
        out.push_str("</ul>");
        *in_list = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn classifies_headings_lists_and_paragraphs() {
        let rendered = render_content(&lines(&["## Title", "- a", "- b", "text"]));
        assert_eq!(
            rendered,
            "<h2>Title</h2><ul><li>a</li><li>b</li></ul><p>text</p>"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_content(&[]), "");
    }

    #[test]
    fn blank_line_closes_an_open_list() {
        let rendered = render_content(&lines(&["- a", "", "- b"]));
        assert_eq!(rendered, "<ul><li>a</li></ul><ul><li>b</li></ul>");
    }

    #[test]
    fn list_left_open_at_end_is_closed() {
        let rendered = render_content(&lines(&["intro", "- only"]));
        assert_eq!(rendered, "<p>intro</p><ul><li>only</li></ul>");
    }

    #[test]
    fn line_text_is_escaped() {
        let rendered = render_content(&lines(&["## <b>", "- 1 < 2"]));
        assert_eq!(rendered, "<h2>&lt;b&gt;</h2><ul><li>1 &lt; 2</li></ul>");
    }
}
