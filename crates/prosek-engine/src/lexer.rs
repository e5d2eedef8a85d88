//! Logos adapter: classify source text into the engine's token shape.

use logos::Logos;
use prosek_table::SymbolId;

use crate::token::Token;

/// Run a [`logos`] lexer over `source`, mapping each variant to its
/// table symbol id.
///
/// Lexer errors become `UNKNOWN` tokens (the engine halts on the first
/// one it reaches), and the result is `EOI`-terminated, ready for
/// [`SliceSource`](crate::SliceSource).
pub fn tokenize<'s, T>(source: &'s str, map: impl Fn(&T) -> SymbolId) -> Vec<Token<usize>>
where
    T: Logos<'s, Source = str>,
    T::Extras: Default,
{
    let mut lexer = T::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let id = match &result {
            Ok(token) => map(token),
            Err(_) => SymbolId::UNKNOWN,
        };
        tokens.push(Token::new(id, span.start, span.end));
    }

    tokens.push(Token::new(SymbolId::EOI, source.len(), source.len()));
    tokens
}
