//! Tooltip content
//!
//! A small element/text tree handed to the host for display on hover, and
//! the builder that turns a registry entry into that tree.

use std::fmt::{self, Write};

use pulldown_cmark_escape::{FmtWriter, escape_href, escape_html, escape_html_body_text};
use serde::Serialize;

use crate::registry::{Example, MediaKind, Reference, TermEntry, TermRegistry};

pub const TOOLTIP_CONTAINER_CLASS: &str = "tooltip-container";
pub const TOOLTIP_CONTENT_CLASS: &str = "tooltip-content";
pub const TOOLTIP_HEADER_CLASS: &str = "tooltip-header";

/// Elements written without children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Element(Element),
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn element(tag: impl Into<String>) -> Self {
        ContentNode::Element(Element {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class_name(class);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ContentNode::Element(el) = &mut self {
            el.attributes.push((name.into(), value.into()));
        }
        self
    }

    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.push_child(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ContentNode>) -> Self {
        if let ContentNode::Element(el) = &mut self {
            el.children.extend(children);
        }
        self
    }

    /// Add a class to an element, ignoring duplicates. No-op on text nodes.
    pub fn add_class_name(&mut self, class: &str) {
        if let ContentNode::Element(el) = self {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn push_child(&mut self, child: ContentNode) {
        if let ContentNode::Element(el) = self {
            el.children.push(child);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        matches!(self, ContentNode::Element(el) if el.classes.iter().any(|c| c == class))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            ContentNode::Element(el) => el
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            ContentNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Element(el) => &el.children,
            ContentNode::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            ContentNode::Text { value } => value.clone(),
            ContentNode::Element(el) => el.children.iter().map(|c| c.text_content()).collect(),
        }
    }

    pub fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            ContentNode::Text { value } => escape_html_body_text(FmtWriter(&mut *out), value),
            ContentNode::Element(el) => {
                write!(out, "<{}", el.tag)?;
                if !el.classes.is_empty() {
                    out.write_str(" class=\"")?;
                    escape_html(FmtWriter(&mut *out), &el.classes.join(" "))?;
                    out.write_char('"')?;
                }
                for (name, value) in &el.attributes {
                    write!(out, " {}=\"", name)?;
                    if name == "href" {
                        escape_href(FmtWriter(&mut *out), value)?;
                    } else {
                        escape_html(FmtWriter(&mut *out), value)?;
                    }
                    out.write_char('"')?;
                }
                out.write_char('>')?;
                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return Ok(());
                }
                for child in &el.children {
                    child.write_html(out)?;
                }
                write!(out, "</{}>", el.tag)
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_html(&mut out);
        out
    }
}

/// Controls what the tooltip builder renders beyond the header block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentOptions {
    /// Render usage examples and references into the content block
    pub render_extras: bool,
}

/// Build the tooltip node for `key`, or `None` if the key is empty or
/// unregistered.
pub fn build_tooltip_node(
    key: &str,
    registry: &TermRegistry,
    options: ContentOptions,
) -> Option<ContentNode> {
    if key.is_empty() {
        return None;
    }
    let entry = registry.lookup(key)?;
    Some(tooltip_node(entry, options))
}

fn tooltip_node(entry: &TermEntry, options: ContentOptions) -> ContentNode {
    let header = ContentNode::element("p")
        .with_class(TOOLTIP_HEADER_CLASS)
        .with_child(ContentNode::text(&entry.title));

    let mut content = ContentNode::element("div")
        .with_class(TOOLTIP_CONTENT_CLASS)
        .with_children([
            header,
            ContentNode::element("p").with_child(ContentNode::text(&entry.category)),
            ContentNode::element("p").with_child(ContentNode::text(&entry.description)),
        ]);

    if options.render_extras {
        if !entry.examples.is_empty() {
            content.push_child(examples_node(&entry.examples));
        }
        if !entry.references.is_empty() {
            content.push_child(references_node(&entry.references));
        }
    }

    ContentNode::element("div")
        .with_class(TOOLTIP_CONTAINER_CLASS)
        .with_attribute("role", "tooltip")
        .with_attribute("tooltip-value", &entry.key)
        .with_child(content)
}

fn examples_node(examples: &[Example]) -> ContentNode {
    let items = examples.iter().map(|example| {
        let mut node = ContentNode::element("div").with_class("tooltip-example");
        if let Some(title) = &example.title {
            node.push_child(
                ContentNode::element("p")
                    .with_class("tooltip-example-title")
                    .with_child(ContentNode::text(title)),
            );
        }
        if let Some(description) = &example.description {
            node.push_child(ContentNode::element("p").with_child(ContentNode::text(description)));
        }
        if let Some(code) = &example.code {
            node.push_child(
                ContentNode::element("pre")
                    .with_child(ContentNode::element("code").with_child(ContentNode::text(code))),
            );
        }
        for media in &example.media {
            let tag = match media.kind {
                MediaKind::Video => "video",
                MediaKind::Image | MediaKind::Gif => "img",
            };
            node.push_child(ContentNode::element(tag).with_attribute("src", &media.source));
        }
        node
    });

    ContentNode::element("div")
        .with_class("tooltip-examples")
        .with_children(items)
}

fn references_node(references: &[Reference]) -> ContentNode {
    let items = references.iter().map(|reference| {
        let label = reference.name.as_deref().unwrap_or(&reference.url);
        let mut link = ContentNode::element("a")
            .with_attribute("href", &reference.url)
            .with_child(ContentNode::text(label));
        if let Some(description) = &reference.description {
            link = link.with_attribute("title", description);
        }
        ContentNode::element("li").with_child(link)
    });

    ContentNode::element("ul")
        .with_class("tooltip-references")
        .with_children(items)
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
