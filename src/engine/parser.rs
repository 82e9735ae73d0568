/// Core parsing logic.
///
/// Entry point, recursion over parenthesized groups, and the flattened
/// operand/operator form groups are reduced to.
pub mod core;

/// Binary operator collapsing.
///
/// Turns the flattened form into a tree in two passes: the high tier (`*`,
/// `/`) first, then the low tier (`+`, `-`).
pub mod binary;
