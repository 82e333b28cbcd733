//! Error types for template parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::ast::Malformed;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Directive shapes listed in diagnostics
const DIRECTIVES: [&str; 4] = ["[#]", "[N]", "[a|b]", "[a|b|c]"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Template error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl TemplateError {
    /// Describe a malformed piece of a template
    pub fn malformed(malformed: &Malformed, span: Span) -> Self {
        let (message, expected) = match malformed {
            Malformed::Unclosed => ("unclosed '['".to_string(), vec!["']'".to_string()]),
            Malformed::Unopened => ("unmatched ']'".to_string(), Vec::new()),
            Malformed::Unknown(content) => (
                format!("unknown directive '[{}]'", content),
                DIRECTIVES.iter().map(|d| d.to_string()).collect(),
            ),
            Malformed::Nested { .. } => ("directives cannot be nested".to_string(), Vec::new()),
        };
        TemplateError::Syntax {
            span,
            message,
            expected,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            TemplateError::Syntax { span, .. } => span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TemplateError::Syntax { message, .. } => message,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            TemplateError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                // Writing into a Vec cannot fail
                let _ = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
