/// Numeric formatting helpers.
///
/// Literal values are printed back in a form the lexer accepts again, so that
/// rendered trees and token streams can be re-read without changing the kind
/// of any literal.
pub mod num;
