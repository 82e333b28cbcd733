//! Message catalogs: named templates loaded from TOML
//!
//! A catalog maps message keys to templates. Every template is compiled while
//! the catalog loads, so a malformed template fails the load instead of
//! surfacing on first use.
//!
//! ```toml
//! [metadata]
//! name = "moderation"
//!
//! [messages]
//! dogs = "[#] dog[|s]"
//! banned = { template = "The following user[|s] [is|are] banned: [0]", join = ", " }
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::CompileOptions;
use crate::count::Count;
use crate::error::TemplateError;
use crate::parser::parse_with;
use crate::renderer::{ListRenderer, Renderer};

/// Errors that can occur when loading or using a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid template for message '{key}': {}", format_template_errors(.errors))]
    Template {
        key: String,
        template: String,
        errors: Vec<TemplateError>,
    },

    #[error("unknown message '{key}'{}", format_suggestions(.suggestions))]
    UnknownKey {
        key: String,
        suggestions: Vec<String>,
    },
}

fn format_template_errors(errors: &[TemplateError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// A set of compiled messages
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Optional name for the catalog
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    messages: BTreeMap<String, ListRenderer>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    messages: BTreeMap<String, TomlMessage>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlMessage {
    Template(String),
    List {
        template: String,
        join: Option<String>,
    },
}

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::from_file_with(path, &CompileOptions::default())
    }

    /// Load a catalog from a TOML file with custom compile options
    pub fn from_file_with(path: &Path, options: &CompileOptions) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str_with(&content, options)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        Self::from_str_with(content, &CompileOptions::default())
    }

    /// Load a catalog from a TOML string with custom compile options
    pub fn from_str_with(content: &str, options: &CompileOptions) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let mut messages = BTreeMap::new();
        for (key, message) in parsed.messages {
            let (template, join) = match message {
                TomlMessage::Template(template) => (template, None),
                TomlMessage::List { template, join } => (template, join),
            };
            let ast = match parse_with(&template, options) {
                Ok(ast) => ast,
                Err(errors) => {
                    return Err(CatalogError::Template {
                        key,
                        template,
                        errors,
                    })
                }
            };
            let renderer = Renderer::new(&template, ast, options);
            messages.insert(key, ListRenderer::new(renderer, join.as_deref()));
        }

        Ok(Catalog {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            messages,
        })
    }

    /// Look up a compiled message
    pub fn get(&self, key: &str) -> Option<&ListRenderer> {
        self.messages.get(key)
    }

    /// Message keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render a message for a count and extra arguments
    pub fn render<S: AsRef<str>>(
        &self,
        key: &str,
        count: impl Into<Count>,
        args: &[S],
    ) -> Result<String, CatalogError> {
        Ok(self.renderer(key)?.render(count, args))
    }

    /// Render a message for a list of items
    pub fn render_list<T: Display>(&self, key: &str, items: &[T]) -> Result<String, CatalogError> {
        Ok(self.lookup(key)?.render(items))
    }

    fn renderer(&self, key: &str) -> Result<&Renderer, CatalogError> {
        self.lookup(key).map(|list| list.renderer())
    }

    fn lookup(&self, key: &str) -> Result<&ListRenderer, CatalogError> {
        self.messages
            .get(key)
            .ok_or_else(|| CatalogError::UnknownKey {
                key: key.to_string(),
                suggestions: find_similar(self.keys(), key, 2),
            })
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() {
        return n;
    }
    if n == 0 {
        return a_chars.len();
    }

    // Single rolling row of the edit matrix
    let mut row: Vec<usize> = (0..=n).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[n]
}

/// Find similar keys within a maximum edit distance
fn find_similar<'a>(
    keys: impl Iterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = keys
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            if dist <= max_distance && dist > 0 {
                Some((name, dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}
