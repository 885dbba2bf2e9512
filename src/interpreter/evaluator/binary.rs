/// Arithmetic and string concatenation.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;

/// Short-circuiting `&&` and `||`.
pub mod logic;
