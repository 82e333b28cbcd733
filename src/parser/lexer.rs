//! Lexer for plural templates using logos
//!
//! Directive patterns overlap only at their opening bracket and logos always
//! takes the longest match, which is what gives a three-way group `[a|b|c]`
//! precedence over a two-way group followed by stray text.
//!
//! A run that starts like a group but is never closed (`[a|b`) is rejected by
//! logos as a whole. [`lex`] splits such runs back into brackets and text and
//! merges neighbouring text, so the token spans always tile the input.

use logos::Logos;

use crate::parser::ast::Forms;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// `[#]`
    #[token("[#]")]
    Count,

    /// `[singular|plural|zero]`
    #[regex(r"\[[^|\[\]]*\|[^|\[\]]*\|[^|\[\]]*\]", group_forms)]
    ThreeWay(Forms),

    /// `[singular|plural]`
    #[regex(r"\[[^|\[\]]*\|[^|\[\]]*\]", group_forms)]
    TwoWay(Forms),

    /// `[N]`; an index too large for `usize` saturates and is never in range
    #[regex(r"\[[0-9]+\]", arg_index)]
    Arg(usize),

    // Brackets that do not open or close a directive
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,

    #[regex(r"[^\[\]]+", |lex| lex.slice().to_string())]
    Text(String),
}

fn group_forms(lex: &mut logos::Lexer<Token>) -> Forms {
    let slice = lex.slice();
    let mut parts = slice[1..slice.len() - 1].split('|');
    let singular = parts.next().unwrap_or_default().to_string();
    let plural = parts.next().unwrap_or_default().to_string();
    let zero = parts.next().map(str::to_string);
    Forms {
        singular,
        plural,
        zero,
    }
}

fn arg_index(lex: &mut logos::Lexer<Token>) -> usize {
    let slice = lex.slice();
    slice[1..slice.len() - 1].parse().unwrap_or(usize::MAX)
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    let mut tokens: Vec<(Token, Span)> = Vec::new();
    for (tok, span) in Token::lexer(input).spanned() {
        match tok {
            Ok(tok) => push(&mut tokens, tok, span),
            Err(_) => {
                for (tok, span) in split_unterminated(&input[span.clone()], span.start) {
                    push(&mut tokens, tok, span);
                }
            }
        }
    }
    tokens.into_iter()
}

/// Break a rejected run into bracket and text tokens
fn split_unterminated(slice: &str, offset: usize) -> Vec<(Token, Span)> {
    let mut tokens = Vec::new();
    let mut text_start = None;
    for (i, c) in slice.char_indices() {
        let bracket = match c {
            '[' => Token::BracketOpen,
            ']' => Token::BracketClose,
            _ => {
                text_start.get_or_insert(i);
                continue;
            }
        };
        if let Some(start) = text_start.take() {
            tokens.push((
                Token::Text(slice[start..i].to_string()),
                offset + start..offset + i,
            ));
        }
        tokens.push((bracket, offset + i..offset + i + 1));
    }
    if let Some(start) = text_start {
        tokens.push((
            Token::Text(slice[start..].to_string()),
            offset + start..offset + slice.len(),
        ));
    }
    tokens
}

/// Append a token, extending the previous one when both are text
fn push(tokens: &mut Vec<(Token, Span)>, tok: Token, span: Span) {
    if let (Token::Text(text), Some((Token::Text(prev), prev_span))) = (&tok, tokens.last_mut()) {
        prev.push_str(text);
        prev_span.end = span.end;
        return;
    }
    tokens.push((tok, span));
}
