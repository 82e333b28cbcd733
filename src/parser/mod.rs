//! Parser for plural templates

pub mod ast;
mod grammar;
pub mod lexer;
mod validate;

pub use ast::*;

use crate::config::CompileOptions;
use crate::error::TemplateError;

/// Parse a template, rejecting malformed brackets
pub fn parse(input: &str) -> Result<Template, Vec<TemplateError>> {
    parse_with(input, &CompileOptions::default())
}

/// Parse a template with explicit options
pub fn parse_with(input: &str, options: &CompileOptions) -> Result<Template, Vec<TemplateError>> {
    let pieces = grammar::parse_pieces(input);
    validate::validate(pieces, input, options)
}
