//! Hover tooltips for registered keywords inside rendered code blocks.
//!
//! The host hands over the lines of each opted-in code block; every
//! occurrence of a registered term gets an annotation carrying a tooltip
//! node describing it.

pub mod annotator;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod pattern;
pub mod plugin;
pub mod registry;
pub mod styles;

pub use annotator::{AnnotationHandle, HostLine, LineAnnotator, TooltipAnnotation};
pub use cache::{AnnotationCache, CacheScope};
pub use config::Config;
pub use content::{ContentNode, ContentOptions, build_tooltip_node};
pub use error::{Result, TooltipError};
pub use host::{SourceBlock, SourceLine};
pub use pattern::{ColumnRange, KeywordPattern, MatchPolicy, MatchSpan};
pub use plugin::{CodeBlock, TooltipPlugin};
pub use registry::{TermEntry, TermRegistry};
