//! Line annotator
//!
//! Scans one line of a code block for registered keywords and asks the host
//! to decorate each match with its tooltip. Matches are processed right to
//! left: every edit replaces text in place, and an edit never shifts the
//! columns of text to its left.

use serde::Serialize;

use crate::cache::{AnnotationCache, CacheScope};
use crate::content::{ContentNode, ContentOptions, build_tooltip_node};
use crate::error::Result;
use crate::pattern::{ColumnRange, KeywordPattern, MatchPolicy, MatchSpan};
use crate::registry::TermRegistry;

pub const SPECIAL_TOKEN_CLASS: &str = "special-token";

/// Opaque handle returned by the host for a registered annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationHandle(pub usize);

/// The line primitives the annotator needs from the rendering host
pub trait HostLine {
    /// Current plaintext of the line
    fn text(&self) -> &str;

    /// Register a decoration over a column range of the line
    fn add_annotation(&mut self, annotation: TooltipAnnotation) -> AnnotationHandle;

    /// Replace the text in columns `[start, end)` with `replacement`
    fn edit_text(&mut self, start: usize, end: usize, replacement: &str);
}

/// A span decoration carrying the tooltip for one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipAnnotation {
    pub range: ColumnRange,
    pub term: String,
    pub content: ContentNode,
}

impl TooltipAnnotation {
    /// Wrap each node the host hands over in a `span.special-token` and
    /// attach the tooltip to it.
    pub fn render(&self, nodes: Vec<ContentNode>) -> Vec<ContentNode> {
        nodes
            .into_iter()
            .map(|mut node| {
                let span = ContentNode::element("span").with_class(SPECIAL_TOKEN_CLASS);
                match node {
                    ContentNode::Element(_) => {
                        node.push_child(self.content.clone());
                        span.with_child(node)
                    }
                    ContentNode::Text { .. } => {
                        span.with_children([node, self.content.clone()])
                    }
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct LineAnnotator {
    registry: TermRegistry,
    pattern: Option<KeywordPattern>,
    options: ContentOptions,
    scope: CacheScope,
}

impl LineAnnotator {
    /// Compile the keyword pattern once; the registry never changes afterwards.
    pub fn new(
        registry: TermRegistry,
        policy: MatchPolicy,
        options: ContentOptions,
    ) -> Result<Self> {
        let pattern = KeywordPattern::build(registry.keys(), policy)?;
        Ok(Self {
            registry,
            pattern,
            options,
            scope: CacheScope::next(),
        })
    }

    pub fn registry(&self) -> &TermRegistry {
        &self.registry
    }

    /// Cache entries built by this annotator live under this scope
    pub fn cache_scope(&self) -> CacheScope {
        self.scope
    }

    pub fn scan(&self, text: &str) -> Vec<MatchSpan> {
        match &self.pattern {
            Some(pattern) => pattern.find_all(text),
            None => Vec::new(),
        }
    }

    pub fn annotate<L: HostLine + ?Sized>(&self, line: &mut L, cache: &mut AnnotationCache) {
        let spans = self.scan(line.text());
        let mut annotated = 0;

        for span in spans.into_iter().rev() {
            let keyword = span.text.trim();
            let ColumnRange { start, end } = span.range;

            let content = cache
                .get_or_insert_with(self.scope, keyword, || {
                    build_tooltip_node(keyword, &self.registry, self.options)
                })
                .cloned();

            if let Some(content) = content {
                line.add_annotation(TooltipAnnotation {
                    range: span.range,
                    term: keyword.to_string(),
                    content,
                });
                annotated += 1;
            }

            // Strips authoring markers inside the span, leaving the keyword
            line.edit_text(start, end, keyword);
        }

        if annotated > 0 {
            log::debug!("Annotated {} keywords", annotated);
        }
    }
}

#[cfg(test)]
#[path = "annotator_tests.rs"]
mod annotator_tests;
