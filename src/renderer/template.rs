//! Rendering a compiled template for a count

use std::fmt::Write;
use std::sync::Arc;

use crate::config::CompileOptions;
use crate::count::Count;
use crate::parser::ast::{Segment, Template};

/// A compiled template.
///
/// Cloning is cheap and the segments are immutable, so a renderer can be
/// shared freely between threads. Rendering is pure: the same count and
/// arguments always produce the same text.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: Arc<Program>,
}

#[derive(Debug)]
struct Program {
    source: String,
    segments: Vec<Segment>,
    /// Total length of literal text, used to size the output buffer
    literal_len: usize,
    missing_argument: String,
    max_arg: Option<usize>,
}

impl Renderer {
    /// Lower a parsed template into a renderer
    pub fn new(source: &str, template: Template, options: &CompileOptions) -> Self {
        let max_arg = template.max_arg();
        let segments: Vec<Segment> = template.segments.into_iter().map(|s| s.node).collect();
        let literal_len = segments
            .iter()
            .map(|s| match s {
                Segment::Literal(text) => text.len(),
                _ => 0,
            })
            .sum();

        Self {
            program: Arc::new(Program {
                source: source.to_string(),
                segments,
                literal_len,
                missing_argument: options.missing_argument.clone(),
                max_arg,
            }),
        }
    }

    /// Render for a count and extra arguments.
    ///
    /// `[N]` reads `args[N]`; an index past the end renders the configured
    /// missing-argument text.
    pub fn render<S: AsRef<str>>(&self, count: impl Into<Count>, args: &[S]) -> String {
        let count = count.into();
        let program = &*self.program;
        let mut out = String::with_capacity(program.literal_len + 8);

        for segment in &program.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                // Writing into a String cannot fail
                Segment::Count => {
                    let _ = write!(out, "{}", count);
                }
                Segment::Group(forms) => out.push_str(forms.select(count)),
                Segment::Arg(index) => out.push_str(
                    args.get(*index)
                        .map(|arg| AsRef::<str>::as_ref(arg))
                        .unwrap_or(program.missing_argument.as_str()),
                ),
            }
        }

        out
    }

    /// Render for a count with no extra arguments
    pub fn render_count(&self, count: impl Into<Count>) -> String {
        let args: &[&str] = &[];
        self.render(count, args)
    }

    /// Convert into a plain closure
    pub fn into_fn<S: AsRef<str>>(self) -> impl Fn(Count, &[S]) -> String + Clone + Send + Sync {
        move |count: Count, args: &[S]| self.render(count, args)
    }

    /// The template text this renderer was compiled from
    pub fn source(&self) -> &str {
        &self.program.source
    }

    /// The compiled segments, adjacent literals merged
    pub fn segments(&self) -> &[Segment] {
        &self.program.segments
    }

    /// Highest argument index the template reads, if any
    pub fn max_arg(&self) -> Option<usize> {
        self.program.max_arg
    }
}
