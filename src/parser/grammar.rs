//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse a template into pieces, malformed runs included.
///
/// Every token sequence is accepted here; deciding whether a malformed piece
/// is an error or literal text is left to validation.
pub fn parse_pieces(input: &str) -> Vec<Spanned<Piece>> {
    let len = input.len();

    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    // Each alternative below starts on a different token kind and together
    // they cover all of them, so the parse never fails
    template_parser()
        .parse(token_stream)
        .into_output()
        .unwrap_or_default()
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn template_parser<'a, I>(
) -> impl Parser<'a, I, Vec<Spanned<Piece>>, extra::Default> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let directive = select! {
        Token::Count => Segment::Count,
        Token::TwoWay(forms) => Segment::Group(forms),
        Token::ThreeWay(forms) => Segment::Group(forms),
        Token::Arg(index) => Segment::Arg(index),
    }
    .map_with(|seg, e| Spanned::new(seg, span_range(&e.span())));

    let text = select! {
        Token::Text(s) => s,
    };

    let open = just(Token::BracketOpen);
    let close = just(Token::BracketClose);

    // [a|[b|c]] lexes as '[' "a|" [b|c] ']'
    let nested = open
        .clone()
        .ignore_then(text.clone().or_not())
        .then(directive.clone())
        .then(text.clone().or_not())
        .then_ignore(close.clone())
        .map(|((before, inner), after)| Malformed::Nested {
            before,
            inner,
            after,
        });

    let unknown = open
        .clone()
        .ignore_then(text.clone().or_not())
        .then_ignore(close.clone())
        .map(|content| Malformed::Unknown(content.unwrap_or_default()));

    let stray = choice((
        open.to(Malformed::Unclosed),
        close.to(Malformed::Unopened),
    ));

    // Order matters: the bracketed shapes must be tried before a lone bracket
    choice((
        directive.map(|seg| Piece::Segment(seg.node)),
        text.map(|s| Piece::Segment(Segment::Literal(s))),
        nested.map(Piece::Malformed),
        unknown.map(Piece::Malformed),
        stray.map(Piece::Malformed),
    ))
    .map_with(|piece, e| Spanned::new(piece, span_range(&e.span())))
    .repeated()
    .collect::<Vec<_>>()
    .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(input: &str) -> Vec<Piece> {
        parse_pieces(input)
            .into_iter()
            .map(|p| p.node)
            .collect()
    }

    #[test]
    fn test_parse_empty_template() {
        assert!(nodes("").is_empty());
    }

    #[test]
    fn test_parse_directives() {
        let pieces = nodes("[#] dog[|s] [0]");
        assert_eq!(pieces.len(), 5);
        assert!(matches!(pieces[0], Piece::Segment(Segment::Count)));
        assert!(matches!(pieces[2], Piece::Segment(Segment::Group(_))));
        assert!(matches!(pieces[4], Piece::Segment(Segment::Arg(0))));
    }

    #[test]
    fn test_parse_spans() {
        let pieces = parse_pieces("a[#]b");
        let spans: Vec<_> = pieces.iter().map(|p| p.span.clone()).collect();
        assert_eq!(spans, vec![0..1, 1..4, 4..5]);
    }

    #[test]
    fn test_parse_unknown_directive() {
        let pieces = parse_pieces("x [abc] y");
        assert_eq!(pieces[1].node, Piece::Malformed(Malformed::Unknown("abc".to_string())));
        assert_eq!(pieces[1].span, 2..7);
    }

    #[test]
    fn test_parse_empty_brackets() {
        assert_eq!(
            nodes("[]"),
            vec![Piece::Malformed(Malformed::Unknown(String::new()))]
        );
    }

    #[test]
    fn test_parse_nested_group() {
        let pieces = parse_pieces("[a|[b|c]]");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].span, 0..9);
        match &pieces[0].node {
            Piece::Malformed(Malformed::Nested {
                before,
                inner,
                after,
            }) => {
                assert_eq!(before.as_deref(), Some("a|"));
                assert!(matches!(inner.node, Segment::Group(_)));
                assert_eq!(inner.span, 3..8);
                assert!(after.is_none());
            }
            other => panic!("Expected nested group, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_stray_brackets() {
        assert_eq!(
            nodes("a [b"),
            vec![
                Piece::Segment(Segment::Literal("a ".to_string())),
                Piece::Malformed(Malformed::Unclosed),
                Piece::Segment(Segment::Literal("b".to_string())),
            ]
        );
        assert_eq!(
            nodes("b]"),
            vec![
                Piece::Segment(Segment::Literal("b".to_string())),
                Piece::Malformed(Malformed::Unopened),
            ]
        );
    }

    #[test]
    fn test_parse_unterminated_group() {
        let pieces = parse_pieces("x [1|| y");
        let nodes: Vec<_> = pieces.iter().map(|p| &p.node).collect();
        assert_eq!(
            nodes,
            vec![
                &Piece::Segment(Segment::Literal("x ".to_string())),
                &Piece::Malformed(Malformed::Unclosed),
                &Piece::Segment(Segment::Literal("1|| y".to_string())),
            ]
        );
        assert_eq!(pieces[1].span, 2..3);
    }

    #[test]
    fn test_parse_four_alternatives_unclosed() {
        assert_eq!(
            nodes("[a|b|c|d"),
            vec![
                Piece::Malformed(Malformed::Unclosed),
                Piece::Segment(Segment::Literal("a|b|c|d".to_string())),
            ]
        );
    }
}
