//! Consumer contract for grammar-definition import.
//!
//! A Bison-syntax reader tokenizes a definition file, recognizes
//! directives and rules with this same engine over a once-built
//! directive grammar, and replays what it finds onto a rule-table
//! builder through [`RuleBuilder`]. Only the consumer side of that
//! contract lives here; readers and the table generator behind them are
//! separate components.

/// Callbacks a grammar reader drives while walking a definition file.
///
/// Names arrive as written in the source, one per call; rule
/// alternatives arrive one [`production`](Self::production) call each.
pub trait RuleBuilder {
    /// `%token NAME`
    fn token(&mut self, name: &str);

    /// `%left NAME`
    fn left(&mut self, name: &str);

    /// `%right NAME`
    fn right(&mut self, name: &str);

    /// `%nonassoc NAME`
    fn nonassoc(&mut self, name: &str);

    /// `%precedence NAME`
    fn precedence(&mut self, name: &str);

    /// `%start NAME`
    fn start(&mut self, name: &str);

    /// `NAME : rhs ;` — one alternative, rhs text as written.
    fn production(&mut self, lhs: &str, rhs: &str);
}

/// Syntax error from a grammar reader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error on line {line}: '{token}'")]
pub struct GrammarReadError {
    /// 1-based line of the offending token in the definition source.
    pub line: usize,
    /// The offending token's text.
    pub token: String,
}
