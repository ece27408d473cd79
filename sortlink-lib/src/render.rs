//! Markup rendering for sort links.

use indexmap::IndexMap;

/// HTML attributes of a rendered link, in output order.
pub type HtmlAttributes = IndexMap<String, String>;

/// Trait for link renderers.
pub trait LinkRenderer {
    /// Renders a clickable element pointing at `url`.
    fn render_link(&self, label: &str, url: &str, attributes: &HtmlAttributes) -> String;
}

/// Renders sort links as HTML `<a>` elements.
#[derive(Debug, Clone)]
pub struct HtmlLinkRenderer {
    encode_label: bool,
}

impl Default for HtmlLinkRenderer {
    fn default() -> Self {
        Self { encode_label: true }
    }
}

impl HtmlLinkRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits labels as raw markup instead of escaping them.
    pub fn with_raw_labels(mut self) -> Self {
        self.encode_label = false;
        self
    }
}

impl LinkRenderer for HtmlLinkRenderer {
    fn render_link(&self, label: &str, url: &str, attributes: &HtmlAttributes) -> String {
        let mut html = format!("<a href=\"{}\"", escape_html(url));
        for (name, value) in attributes {
            if name == "href" {
                continue;
            }
            html.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        html.push('>');
        if self.encode_label {
            html.push_str(&escape_html(label));
        } else {
            html.push_str(label);
        }
        html.push_str("</a>");
        html
    }
}

/// Escapes a string for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
