/// Errors reported by the solver.
///
/// Both variants are terminal for a given input: a board that fails
/// validation or exhausts the search will do so again unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The input board violates a row, column, or box constraint, or holds a
    /// digit outside `1..=n`. Reported at construction; no solver is built.
    #[display("board violates row, column, or box constraints")]
    InvalidBoard,
    /// Exhaustive search proved that no valid completion exists. The board
    /// is left exactly as it was before the solve call.
    #[display("board has no valid completion")]
    UnsolvableBoard,
}
