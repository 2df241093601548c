//! # arithma-front
//!
//! The front end of the arithma expression language: it reads one line of
//! arithmetic source text and produces an abstract syntax tree with the usual
//! operator precedence and parenthesised grouping. The tree is not
//! evaluated.
//!
//! ```text
//! source text → lexer → tokens → parser → AST
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents a parsed arithmetic
/// expression as a tree, and the literal values its leaves carry.
///
/// # Responsibilities
/// - Defines number leaves and binary operation nodes.
/// - Renders trees in tree form and in canonical infix form.
pub mod ast;
/// Provides error types for lexing and parsing.
///
/// This module defines every error the pipeline can raise and the rendered
/// diagnostic they all convert into, carrying a kind, detail text and the
/// source range of the failure.
///
/// # Responsibilities
/// - Defines error enums for each phase (lexer, parser).
/// - Renders diagnostics as `<kind>: <details> file: <name>, line: <line>`.
pub mod error;
/// Runs the lexer and parser.
///
/// Ties together source positions, tokens and the recursive-descent parser.
pub mod interpreter;
/// Annotated source reports for diagnostics.
///
/// Renders an [`error::Error`] as a source snippet with the offending range
/// underlined.
pub mod report;
/// General helpers.
pub mod util;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse},
};

/// Lexes and parses one line of source text.
///
/// `file_name` is only used to label diagnostics.
///
/// # Errors
/// Returns the first lexing or parsing error, converted into a rendered
/// [`Error`]. Parsing is not attempted if lexing fails.
///
/// # Examples
/// ```
/// use arithma_front::run;
///
/// let tree = run("<stdin>", "(1 + 2) * 3").unwrap();
/// assert_eq!(tree.to_string(), "((INT:1, PLUS, INT:2), MUL, INT:3)");
///
/// let error = run("<stdin>", "(1 + 2").unwrap_err();
/// assert_eq!(error.to_string(),
///            "Expected Closing Paren: expected RPAREN but found end of input file: <stdin>, line: 0");
/// ```
pub fn run(file_name: &str, text: &str) -> Result<Node, Error> {
    let tokens = tokenize(file_name, text)?;
    Ok(parse(&tokens)?)
}
