// Configuration type definitions

use serde::Deserialize;

use crate::error::Result;
use crate::pattern::MatchPolicy;
use crate::registry::{TermEntry, TermRegistry};

pub const DEFAULT_MARKER: &str = "naive-code-tooltip";

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

/// Plugin configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    /// Blocks whose meta contains this string are annotated
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default)]
    pub match_policy: MatchPolicy,
    #[serde(default)]
    pub render_extras: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            marker: default_marker(),
            match_policy: MatchPolicy::Longest,
            render_extras: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub plugin: PluginConfig,
    /// `None` falls back to the built-in terms; `Some(vec![])` disables matching
    #[serde(default)]
    pub terms: Option<Vec<TermEntry>>,
}

impl Config {
    pub fn registry(&self) -> Result<TermRegistry> {
        match &self.terms {
            Some(terms) => TermRegistry::new(terms.clone()),
            None => TermRegistry::builtin(),
        }
    }
}
