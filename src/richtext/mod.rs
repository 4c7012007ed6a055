//! Rich-text rendering bridge
//!
//! The body-block schema is owned by the content service; this module only
//! maps the block kinds it recognizes to markup and treats everything else
//! as a paragraph. Inline span formatting is the service's concern and is
//! not re-derived here.

use crate::cms::RichTextBlock;

/// Convert body blocks to HTML, in block order
pub fn as_html(blocks: &[RichTextBlock]) -> String {
    let mut html = String::new();
    let mut open_list: Option<&str> = None;

    for block in blocks {
        let list_tag = match block.kind.as_str() {
            "list-item" => Some("ul"),
            "o-list-item" => Some("ol"),
            _ => None,
        };

        // Close a list when leaving it, open one when entering
        if open_list != list_tag {
            if let Some(tag) = open_list {
                html.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = list_tag {
                html.push_str(&format!("<{}>", tag));
            }
            open_list = list_tag;
        }

        match block.kind.as_str() {
            "heading1" | "heading2" | "heading3" | "heading4" | "heading5" | "heading6" => {
                let level = &block.kind[7..8];
                html.push_str(&format!(
                    "<h{level}>{}</h{level}>",
                    escape_html(&block.text)
                ));
            }
            "preformatted" => {
                html.push_str(&format!("<pre>{}</pre>", escape_html(&block.text)));
            }
            "image" => {
                let url = block
                    .extra
                    .get("url")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");
                let alt = block
                    .extra
                    .get("alt")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");
                html.push_str(&format!(
                    r#"<img src="{}" alt="{}" />"#,
                    escape_html(url),
                    escape_html(alt)
                ));
            }
            "list-item" | "o-list-item" => {
                html.push_str(&format!("<li>{}</li>", escape_html(&block.text)));
            }
            _ => {
                html.push_str(&format!("<p>{}</p>", escape_html(&block.text)));
            }
        }
    }

    if let Some(tag) = open_list {
        html.push_str(&format!("</{}>", tag));
    }

    html
}

/// Join the plain text of all blocks, space-separated
pub fn as_text(blocks: &[RichTextBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
