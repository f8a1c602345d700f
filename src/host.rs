//! In-memory host
//!
//! A minimal rendering host: lines of plain text that accept annotations
//! and edits by character column, and render to HTML with each annotated
//! span wrapped by its tooltip.

use serde::Serialize;

use crate::annotator::{AnnotationHandle, HostLine, TooltipAnnotation};
use crate::content::ContentNode;
use crate::plugin::CodeBlock;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceLine {
    text: String,
    annotations: Vec<TooltipAnnotation>,
}

impl SourceLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    pub fn annotations(&self) -> &[TooltipAnnotation] {
        &self.annotations
    }

    /// Render the line, escaping plain text and expanding annotations.
    /// Annotations overlapping an earlier one are dropped.
    pub fn to_html(&self) -> String {
        let chars: Vec<char> = self.text.chars().collect();
        let mut ordered: Vec<&TooltipAnnotation> = self.annotations.iter().collect();
        ordered.sort_by_key(|a| a.range);

        let mut out = String::new();
        let mut column = 0;
        for annotation in ordered {
            let start = annotation.range.start.min(chars.len());
            let end = annotation.range.end.min(chars.len());
            if start < column || start >= end {
                continue;
            }

            let before: String = chars[column..start].iter().collect();
            out.push_str(&ContentNode::text(before).to_html());

            let token: String = chars[start..end].iter().collect();
            for node in annotation.render(vec![ContentNode::text(token)]) {
                out.push_str(&node.to_html());
            }
            column = end;
        }

        let rest: String = chars[column..].iter().collect();
        out.push_str(&ContentNode::text(rest).to_html());
        out
    }
}

fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

impl HostLine for SourceLine {
    fn text(&self) -> &str {
        &self.text
    }

    fn add_annotation(&mut self, annotation: TooltipAnnotation) -> AnnotationHandle {
        self.annotations.push(annotation);
        AnnotationHandle(self.annotations.len() - 1)
    }

    fn edit_text(&mut self, start: usize, end: usize, replacement: &str) {
        let end = end.max(start);
        let start_byte = byte_offset(&self.text, start);
        let end_byte = byte_offset(&self.text, end);
        self.text.replace_range(start_byte..end_byte, replacement);

        // Keep existing annotations pointing at the same text. Columns past
        // the edit shift with it, columns inside it clamp to the replacement.
        let new_end = start + replacement.chars().count();
        let remap = |column: usize| {
            if column <= start {
                column
            } else if column >= end {
                column - end + new_end
            } else {
                column.min(new_end)
            }
        };
        for annotation in &mut self.annotations {
            let range = &mut annotation.range;
            range.start = remap(range.start);
            range.end = remap(range.end).max(range.start);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceBlock {
    meta: String,
    lines: Vec<SourceLine>,
}

impl SourceBlock {
    pub fn new(meta: impl Into<String>, code: &str) -> Self {
        Self {
            meta: meta.into(),
            lines: code
                .split('\n')
                .map(|line| SourceLine::new(line.strip_suffix('\r').unwrap_or(line)))
                .collect(),
        }
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn to_html(&self) -> String {
        let body = self
            .lines
            .iter()
            .map(SourceLine::to_html)
            .collect::<Vec<_>>()
            .join("\n");
        format!("<pre><code>{}</code></pre>", body)
    }
}

impl CodeBlock for SourceBlock {
    type Line = SourceLine;

    fn meta(&self) -> &str {
        &self.meta
    }

    fn lines_mut(&mut self) -> &mut [SourceLine] {
        &mut self.lines
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
