/// Parser state and the entry point.
///
/// Holds the token cursor, the `parse` function, and the check that no
/// tokens are left after the top-level expression.
pub mod core;

/// Binary operator parsing.
///
/// The two left-associative precedence tiers, `expression` and `term`, built
/// on one shared combinator.
pub mod binary;

/// Factor parsing.
///
/// Numeric literals and parenthesised sub-expressions.
pub mod factor;
