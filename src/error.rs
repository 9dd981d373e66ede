/// Common `Result` type for constructing minimiser views.
pub type Result<T, E = MinimiserError> = core::result::Result<T, E>;

/// Errors raised while constructing a minimiser view.
///
/// All validation happens eagerly, before any value of the input is read.
/// Once a view is built, iterating it never fails.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimiserError {
    /// A window of size 1 over a single sequence would return the input unchanged.
    #[error("window size 1 is degenerate for a single sequence; choose a value greater than 1 or use two sequences")]
    DegenerateWindow,

    /// Windows must contain at least one value.
    #[error("window size must be at least 1")]
    EmptyWindow,

    /// The two sequences of a dual view must have the same length.
    #[error("the two sequences do not have the same length ({first} != {second})")]
    LengthMismatch { first: usize, second: usize },
}
