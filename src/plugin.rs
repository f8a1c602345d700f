//! Tooltip plugin
//!
//! Hooks the line annotator into a host's code-block pipeline. Only blocks
//! that opt in through their meta string are touched; everything else passes
//! through unchanged.

use crate::annotator::{HostLine, LineAnnotator};
use crate::cache::AnnotationCache;
use crate::config::{Config, PluginConfig};
use crate::content::ContentOptions;
use crate::error::Result;
use crate::registry::TermRegistry;
use crate::styles::BASE_STYLES;

pub const PLUGIN_NAME: &str = "tooltips";

/// A code block as exposed by the rendering host
pub trait CodeBlock {
    type Line: HostLine;

    /// Block-level metadata string declared by the author
    fn meta(&self) -> &str;

    fn lines_mut(&mut self) -> &mut [Self::Line];
}

#[derive(Debug, Clone)]
pub struct TooltipPlugin {
    marker: String,
    annotator: LineAnnotator,
}

impl TooltipPlugin {
    pub fn new(registry: TermRegistry, settings: &PluginConfig) -> Result<Self> {
        let options = ContentOptions {
            render_extras: settings.render_extras,
        };
        let annotator = LineAnnotator::new(registry, settings.match_policy, options)?;
        Ok(Self {
            marker: settings.marker.clone(),
            annotator,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.registry()?, &config.plugin)
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn base_styles(&self) -> &'static str {
        BASE_STYLES
    }

    pub fn annotator(&self) -> &LineAnnotator {
        &self.annotator
    }

    pub fn is_enabled_for(&self, meta: &str) -> bool {
        meta.contains(self.marker.as_str())
    }

    /// Annotate every line of `block` if it carries the marker.
    /// Returns whether the block was processed.
    pub fn preprocess_code<B>(&self, block: &mut B, cache: &mut AnnotationCache) -> bool
    where
        B: CodeBlock + ?Sized,
    {
        if !self.is_enabled_for(block.meta()) {
            return false;
        }

        let lines = block.lines_mut();
        log::debug!("Annotating code block with {} lines", lines.len());
        for line in lines.iter_mut() {
            self.annotator.annotate(line, cache);
        }
        true
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod plugin_tests;
