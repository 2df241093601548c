/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads one line of raw source text and produces a stream of
/// tokens: numeric literals, the four arithmetic operators, and parentheses.
/// This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Scans integer and real literals.
/// - Reports the first illegal character or unrepresentable literal.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST honouring operator precedence, left associativity, and parenthesised
/// grouping.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Rejects incomplete or unbalanced input and leftover tokens, reporting
///   the offending token and its position.
pub mod parser;
/// Source positions.
///
/// Defines the cursor the lexer walks over the text and the spans attached to
/// tokens and errors.
pub mod position;
