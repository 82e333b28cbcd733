//! Plural Template - compile pluralization templates into renderers
//!
//! A template such as `"[#] dog[|s]"` is parsed once into a [`Renderer`] that
//! can be called any number of times with a count and extra arguments.
//!
//! # Grammar
//!
//! - `[#]` renders the count.
//! - `[singular|plural]` picks `singular` when the count is exactly one and
//!   `plural` otherwise.
//! - `[singular|plural|zero]` additionally picks `zero` when the count is
//!   exactly zero. Zero is checked first.
//! - `[N]` renders the Nth extra argument, counting from zero.
//! - Everything else is literal text.
//!
//! # Example
//!
//! ```rust
//! use plural_template::compile;
//!
//! let dogs = compile("[#] dog[|s]").unwrap();
//! assert_eq!(dogs.render_count(1), "1 dog");
//! assert_eq!(dogs.render_count(2), "2 dogs");
//! ```

pub mod catalog;
pub mod config;
pub mod count;
pub mod error;
pub mod parser;
pub mod renderer;

pub use catalog::{Catalog, CatalogError};
pub use config::CompileOptions;
pub use count::Count;
pub use error::TemplateError;
pub use parser::{parse, parse_with, Segment, Template};
pub use renderer::{ListRenderer, Renderer};

use thiserror::Error;

/// Errors that can occur while compiling a template
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    /// The template text is malformed
    #[error("template errors: {}", format_template_errors(.0))]
    Parse(Vec<TemplateError>),

    /// A template sequence did not hold exactly one string
    #[error("expected exactly one template string, got {parts}")]
    InvalidSource { parts: usize },
}

impl From<Vec<TemplateError>> for CompileError {
    fn from(errors: Vec<TemplateError>) -> Self {
        CompileError::Parse(errors)
    }
}

impl CompileError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            CompileError::Parse(errors) => errors
                .iter()
                .map(|e| e.format(source, filename))
                .collect::<Vec<_>>()
                .join(""),
            other => other.to_string(),
        }
    }
}

fn format_template_errors(errors: &[TemplateError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The template text handed to the compiler.
///
/// A template is either a string or a sequence holding exactly one string.
#[derive(Debug, Clone, Copy)]
pub enum TemplateSource<'a> {
    Text(&'a str),
    Parts(&'a [&'a str]),
}

impl<'a> TemplateSource<'a> {
    /// Reduce to the single template string
    pub fn text(self) -> Result<&'a str, CompileError> {
        match self {
            TemplateSource::Text(text) => Ok(text),
            TemplateSource::Parts(&[text]) => Ok(text),
            TemplateSource::Parts(parts) => Err(CompileError::InvalidSource { parts: parts.len() }),
        }
    }
}

impl<'a> From<&'a str> for TemplateSource<'a> {
    fn from(text: &'a str) -> Self {
        TemplateSource::Text(text)
    }
}

impl<'a> From<&'a String> for TemplateSource<'a> {
    fn from(text: &'a String) -> Self {
        TemplateSource::Text(text.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for TemplateSource<'a> {
    fn from(parts: &'a [&'a str]) -> Self {
        TemplateSource::Parts(parts)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for TemplateSource<'a> {
    fn from(parts: &'a [&'a str; N]) -> Self {
        TemplateSource::Parts(parts.as_slice())
    }
}

/// Compile a template with default options
///
/// # Example
///
/// ```rust
/// use plural_template::compile;
///
/// let greeting = compile("You have [#] dog[|s] named [0]").unwrap();
/// assert_eq!(greeting.render(1, &["Doug"]), "You have 1 dog named Doug");
/// ```
pub fn compile<'a>(template: impl Into<TemplateSource<'a>>) -> Result<Renderer, CompileError> {
    compile_with(template, &CompileOptions::default())
}

/// Compile a template with custom options
///
/// # Example
///
/// ```rust
/// use plural_template::{compile_with, CompileOptions};
///
/// let options = CompileOptions::new().with_lenient(true);
/// let r = compile_with("[beta] [#] build[|s]", &options).unwrap();
/// assert_eq!(r.render_count(3), "[beta] 3 builds");
/// ```
pub fn compile_with<'a>(
    template: impl Into<TemplateSource<'a>>,
    options: &CompileOptions,
) -> Result<Renderer, CompileError> {
    let source = template.into().text()?;
    let parsed = parse_with(source, options)?;
    Ok(Renderer::new(source, parsed, options))
}

/// Compile a template driven by lists of items
///
/// # Example
///
/// ```rust
/// use plural_template::compile_list;
///
/// let banned = compile_list("The following user[|s] [is|are] banned: [0]", Some(", ")).unwrap();
/// assert_eq!(
///     banned.render(&["Bob", "Josh"]),
///     "The following users are banned: Bob, Josh"
/// );
/// ```
pub fn compile_list<'a>(
    template: impl Into<TemplateSource<'a>>,
    join: Option<&str>,
) -> Result<ListRenderer, CompileError> {
    compile_list_with(template, join, &CompileOptions::default())
}

/// Compile a list template with custom options
pub fn compile_list_with<'a>(
    template: impl Into<TemplateSource<'a>>,
    join: Option<&str>,
    options: &CompileOptions,
) -> Result<ListRenderer, CompileError> {
    let renderer = compile_with(template, options)?;
    Ok(ListRenderer::new(renderer, join))
}
