// Term metadata definitions

use serde::Deserialize;

use crate::error::{Result, TooltipError};

/// Media attached to a usage example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Gif,
}

/// Kind of documentation a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    Guide,
    DocsReference,
    Tutorial,
    Video,
    BlogPost,
    External,
    Example,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaRef {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(alias = "src")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    pub url: String,
}

/// Everything a tooltip knows about one registered keyword
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermEntry {
    pub key: String,
    pub title: String,
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl TermEntry {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            category: category.into(),
            description: description.into(),
            examples: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    /// Reject entries that could never render a complete tooltip.
    ///
    /// Keys are matched verbatim and looked up after trimming, so a key with
    /// surrounding whitespace would match text but never resolve.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(TooltipError::EmptyKey);
        }
        if self.key.trim() != self.key {
            return Err(TooltipError::UntrimmedKey(self.key.clone()));
        }

        let required = [
            ("title", &self.title),
            ("type", &self.category),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(self.missing(field));
            }
        }

        if self.references.iter().any(|r| r.url.trim().is_empty()) {
            return Err(self.missing("references.url"));
        }
        let has_empty_media = self
            .examples
            .iter()
            .flat_map(|e| e.media.iter())
            .any(|m| m.source.trim().is_empty());
        if has_empty_media {
            return Err(self.missing("examples.media.src"));
        }

        Ok(())
    }

    fn missing(&self, field: &'static str) -> TooltipError {
        TooltipError::MissingField {
            key: self.key.clone(),
            field,
        }
    }
}
