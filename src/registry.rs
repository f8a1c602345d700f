//! Term registry
//!
//! Immutable mapping from keyword to the metadata shown in its tooltip.
//! Built once at startup and validated up front, so line processing never
//! has to deal with malformed entries.

mod builtin;
mod term;

use std::collections::HashMap;

pub use builtin::builtin_terms;
pub use term::{Example, MediaKind, MediaRef, Reference, ReferenceKind, TermEntry};

use crate::error::{Result, TooltipError};

#[derive(Debug, Clone, Default)]
pub struct TermRegistry {
    /// Entries in declaration order
    entries: Vec<TermEntry>,
    index: HashMap<String, usize>,
}

impl TermRegistry {
    pub fn new(entries: Vec<TermEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.key.clone(), position).is_some() {
                return Err(TooltipError::DuplicateKey(entry.key.clone()));
            }
        }

        log::debug!("Registered {} tooltip terms", entries.len());
        Ok(Self { entries, index })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(builtin_terms())
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, key: &str) -> Option<&TermEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Registered keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
