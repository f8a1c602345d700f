//! Tests for annotator

use super::*;
use crate::registry::TermEntry;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Annotate(ColumnRange, String),
    Edit(usize, usize, String),
}

/// Host line that records every call made into it
#[derive(Debug, Default)]
struct RecordingLine {
    text: String,
    calls: Vec<Call>,
    annotations: Vec<TooltipAnnotation>,
}

impl RecordingLine {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

impl HostLine for RecordingLine {
    fn text(&self) -> &str {
        &self.text
    }

    fn add_annotation(&mut self, annotation: TooltipAnnotation) -> AnnotationHandle {
        self.calls
            .push(Call::Annotate(annotation.range, annotation.term.clone()));
        self.annotations.push(annotation);
        AnnotationHandle(self.annotations.len() - 1)
    }

    fn edit_text(&mut self, start: usize, end: usize, replacement: &str) {
        self.calls
            .push(Call::Edit(start, end, replacement.to_string()));
        let chars: Vec<char> = self.text.chars().collect();
        let mut text: String = chars[..start].iter().collect();
        text.push_str(replacement);
        text.extend(&chars[end..]);
        self.text = text;
    }
}

fn builtin_annotator() -> LineAnnotator {
    LineAnnotator::new(
        TermRegistry::builtin().unwrap(),
        MatchPolicy::Longest,
        ContentOptions::default(),
    )
    .unwrap()
}

fn annotate(annotator: &LineAnnotator, text: &str) -> RecordingLine {
    let mut line = RecordingLine::new(text);
    annotator.annotate(&mut line, &mut AnnotationCache::new());
    line
}

#[test]
fn test_single_keyword_annotated_and_edited() {
    let line = annotate(&builtin_annotator(), "let p = Point(1, 2);");
    assert_eq!(
        line.calls,
        vec![
            Call::Annotate(ColumnRange::new(8, 13), "Point".to_string()),
            Call::Edit(8, 13, "Point".to_string()),
        ]
    );
    assert_eq!(line.text, "let p = Point(1, 2);");
}

#[test]
fn test_matches_processed_right_to_left() {
    let line = annotate(&builtin_annotator(), "Point add");
    assert_eq!(
        line.calls,
        vec![
            Call::Annotate(ColumnRange::new(6, 9), "add".to_string()),
            Call::Edit(6, 9, "add".to_string()),
            Call::Annotate(ColumnRange::new(0, 5), "Point".to_string()),
            Call::Edit(0, 5, "Point".to_string()),
        ]
    );
    assert_eq!(line.text, "Point add");
}

#[test]
fn test_unregistered_text_untouched() {
    let line = annotate(&builtin_annotator(), "xPointx");
    assert_eq!(
        line.calls,
        vec![
            Call::Annotate(ColumnRange::new(1, 6), "Point".to_string()),
            Call::Edit(1, 6, "Point".to_string()),
        ]
    );
    assert_eq!(line.text, "xPointx");
}

#[test]
fn test_case_sensitive_no_match() {
    let line = annotate(&builtin_annotator(), "point vector ADD");
    assert!(line.calls.is_empty());
}

#[test]
fn test_annotation_carries_tooltip_content() {
    let line = annotate(&builtin_annotator(), "v.subtract(w)");
    assert_eq!(line.annotations.len(), 1);

    let annotation = &line.annotations[0];
    assert_eq!(annotation.term, "subtract");
    assert_eq!(annotation.content.attribute("tooltip-value"), Some("subtract"));
    assert!(annotation.content.text_content().contains("Subtracts two numbers"));
}

#[test]
fn test_cache_populated_and_stable_across_lines() {
    let annotator = builtin_annotator();
    let mut cache = AnnotationCache::new();

    let mut first = RecordingLine::new("Vector::new()");
    annotator.annotate(&mut first, &mut cache);
    let cached = cache.get(annotator.cache_scope(), "Vector").cloned();
    assert!(cached.is_some());

    let mut second = RecordingLine::new("let v: Vector = w;");
    annotator.annotate(&mut second, &mut cache);
    assert_eq!(cache.get(annotator.cache_scope(), "Vector"), cached.as_ref());
    assert_eq!(cache.len(), 1);
    assert_eq!(second.annotations[0].content, first.annotations[0].content);
}

#[test]
fn test_prefix_keys_longest_wins() {
    let registry = TermRegistry::new(vec![
        TermEntry::new("add", "add", "method", "Adds one"),
        TermEntry::new("addAll", "addAll", "method", "Adds many"),
    ])
    .unwrap();
    let annotator =
        LineAnnotator::new(registry, MatchPolicy::Longest, ContentOptions::default()).unwrap();

    let line = annotate(&annotator, "list.addAll(items)");
    assert_eq!(line.annotations.len(), 1);
    assert_eq!(line.annotations[0].term, "addAll");
    assert_eq!(line.annotations[0].range, ColumnRange::new(5, 11));
}

#[test]
fn test_render_wraps_text_node() {
    let line = annotate(&builtin_annotator(), "add");
    let rendered = line.annotations[0].render(vec![ContentNode::text("add")]);

    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].has_class(SPECIAL_TOKEN_CLASS));
    let children = rendered[0].children();
    assert_eq!(children[0], ContentNode::text("add"));
    assert!(children[1].has_class("tooltip-container"));
}

#[test]
fn test_render_appends_tooltip_inside_element_node() {
    let line = annotate(&builtin_annotator(), "add");
    let token = ContentNode::element("span").with_child(ContentNode::text("add"));
    let rendered = line.annotations[0].render(vec![token]);

    let inner = &rendered[0].children()[0];
    assert_eq!(inner.children().len(), 2);
    assert!(inner.children()[1].has_class("tooltip-container"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // An empty registry never calls into the host
    #[test]
    fn prop_empty_registry_is_noop(text in ".{0,60}") {
        let annotator = LineAnnotator::new(
            TermRegistry::default(),
            MatchPolicy::Longest,
            ContentOptions::default(),
        ).unwrap();
        let line = annotate(&annotator, &text);
        prop_assert!(line.calls.is_empty());
        prop_assert_eq!(line.text, text);
    }

    // Annotating never changes the visible text of a plain line and edits
    // arrive in descending column order
    #[test]
    fn prop_text_preserved_and_edits_descend(
        text in "(Point|Vector|add|subtract|point|[ .();x]){0,12}"
    ) {
        let line = annotate(&builtin_annotator(), &text);
        prop_assert_eq!(&line.text, &text);

        let starts: Vec<usize> = line
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Edit(start, _, _) => Some(*start),
                Call::Annotate(..) => None,
            })
            .collect();
        prop_assert!(starts.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(starts.len(), line.annotations.len());
    }
}
