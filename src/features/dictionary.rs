//! Dictionary entry store
//!
//! Entries are keyed by headword and keep their definitions in beta code;
//! hosts render them through a `BetaCodeConverter` when displaying.
//! Insertion order is kept so a random pick is a uniform draw over the
//! entry list.

use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::betacode::BetaCodeConverter;
use crate::utils::error::ConversionResult;
use crate::utils::files::ResourceResolver;

/// A single dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub headword: String,
    pub definition: String,
}

impl Entry {
    pub fn new(headword: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            definition: definition.into(),
        }
    }
}

/// Headword-indexed collection of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: IndexMap<String, Entry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries; a repeated headword replaces the earlier entry
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut dictionary = Self::new();
        for entry in entries {
            dictionary.insert(entry);
        }
        dictionary
    }

    /// Parse a JSON object mapping headwords to definitions
    pub fn from_json(source: &str) -> ConversionResult<Self> {
        let raw: IndexMap<String, String> = serde_json::from_str(source)?;
        Ok(Self::from_entries(
            raw.into_iter()
                .map(|(headword, definition)| Entry::new(headword, definition)),
        ))
    }

    /// Load a JSON dictionary through a resolver
    pub fn load<R: ResourceResolver + ?Sized>(resolver: &R, name: &str) -> ConversionResult<Self> {
        let source = resolver.read_resource(name)?;
        let dictionary = Self::from_json(&source)?;
        tracing::debug!(resource = name, entries = dictionary.entry_count(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.headword.clone(), entry);
    }

    pub fn lookup(&self, headword: &str) -> Option<&Entry> {
        self.entries.get(headword)
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords in insertion order
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Pick an entry uniformly at random, `None` when empty
    pub fn random_entry(&self) -> Option<&Entry> {
        self.random_entry_with(&mut rand::thread_rng())
    }

    /// Pick an entry with the caller's RNG
    pub fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.entries.len());
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    /// Look up a headword and render its definition in Greek
    pub fn lookup_converted(&self, headword: &str, converter: &BetaCodeConverter) -> Option<String> {
        self.lookup(headword)
            .map(|entry| converter.convert(&entry.definition))
    }
}
