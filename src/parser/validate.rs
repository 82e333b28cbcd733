//! Turns parsed pieces into a template, rejecting or keeping malformed runs

use crate::config::CompileOptions;
use crate::error::TemplateError;
use crate::parser::ast::{Malformed, Piece, Segment, Spanned, Template};

/// Validate parsed pieces against the options.
///
/// In strict mode every malformed piece becomes an error and all of them are
/// reported together. In lenient mode malformed pieces are kept as the source
/// text they cover, except that a directive inside a stray bracket pair is
/// still honoured. Adjacent literal runs are merged either way.
pub fn validate(
    pieces: Vec<Spanned<Piece>>,
    source: &str,
    options: &CompileOptions,
) -> Result<Template, Vec<TemplateError>> {
    let mut segments: Vec<Spanned<Segment>> = Vec::with_capacity(pieces.len());
    let mut errors = Vec::new();

    for Spanned { node, span } in pieces {
        match node {
            Piece::Segment(segment) => push(&mut segments, Spanned::new(segment, span)),
            Piece::Malformed(malformed) if options.lenient => {
                recover(&mut segments, malformed, span, source)
            }
            Piece::Malformed(malformed) => errors.push(TemplateError::malformed(&malformed, span)),
        }
    }

    if errors.is_empty() {
        Ok(Template { segments })
    } else {
        Err(errors)
    }
}

fn recover(
    segments: &mut Vec<Spanned<Segment>>,
    malformed: Malformed,
    span: std::ops::Range<usize>,
    source: &str,
) {
    match malformed {
        Malformed::Nested {
            before,
            inner,
            after,
        } => {
            let open = format!("[{}", before.unwrap_or_default());
            let close = format!("{}]", after.unwrap_or_default());
            push(
                segments,
                Spanned::new(Segment::Literal(open), span.start..inner.span.start),
            );
            let inner_end = inner.span.end;
            push(segments, inner);
            push(
                segments,
                Spanned::new(Segment::Literal(close), inner_end..span.end),
            );
        }
        _ => {
            let text = source[span.clone()].to_string();
            push(segments, Spanned::new(Segment::Literal(text), span));
        }
    }
}

/// Append a segment, merging it into a preceding literal when both are text
fn push(segments: &mut Vec<Spanned<Segment>>, segment: Spanned<Segment>) {
    if let Segment::Literal(text) = &segment.node {
        if text.is_empty() {
            return;
        }
        if let Some(Spanned {
            node: Segment::Literal(prev),
            span,
        }) = segments.last_mut()
        {
            prev.push_str(text);
            span.end = segment.span.end;
            return;
        }
    }
    segments.push(segment);
}
