//! Syntax tree types for plural templates

use std::fmt;

use crate::count::Count;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// The alternatives of a group directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forms {
    pub singular: String,
    pub plural: String,
    /// Present only for three-way groups
    pub zero: Option<String>,
}

impl Forms {
    /// Pick the alternative for a count.
    ///
    /// The zero form is checked before the singular form, and anything that
    /// is neither exactly zero nor exactly one gets the plural form.
    pub fn select(&self, count: Count) -> &str {
        match &self.zero {
            Some(zero) if count.is_zero() => zero.as_str(),
            _ if count.is_one() => self.singular.as_str(),
            _ => self.plural.as_str(),
        }
    }
}

/// A well-formed piece of a template
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text emitted verbatim
    Literal(String),
    /// `[#]`: the count itself
    Count,
    /// `[a|b]` or `[a|b|c]`
    Group(Forms),
    /// `[N]`: the Nth extra argument
    Arg(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => write!(f, "literal {:?}", text),
            Segment::Count => write!(f, "count"),
            Segment::Group(Forms {
                singular,
                plural,
                zero: None,
            }) => write!(f, "group {:?} | {:?}", singular, plural),
            Segment::Group(Forms {
                singular,
                plural,
                zero: Some(zero),
            }) => write!(f, "group {:?} | {:?} | zero {:?}", singular, plural, zero),
            Segment::Arg(index) => write!(f, "arg {}", index),
        }
    }
}

/// Bracket usage the grammar does not accept
#[derive(Debug, Clone, PartialEq)]
pub enum Malformed {
    /// `[` with no matching `]`
    Unclosed,
    /// `]` with no matching `[`
    Unopened,
    /// `[text]` that is none of the known directives
    Unknown(String),
    /// A directive inside another bracket pair, e.g. `[a|[b|c]]`
    Nested {
        before: Option<String>,
        inner: Spanned<Segment>,
        after: Option<String>,
    },
}

/// Parser output before validation: either a segment or a malformed run
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Segment(Segment),
    Malformed(Malformed),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    pub segments: Vec<Spanned<Segment>>,
}

impl Template {
    /// Highest argument index referenced, if any
    pub fn max_arg(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s.node {
                Segment::Arg(index) => Some(index),
                _ => None,
            })
            .max()
    }
}
