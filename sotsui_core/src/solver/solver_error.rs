/// Solver errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverError
{
    /// The objective matrix is not positive definite.
    NotPositiveDefinite,
    /// The constraints are contradictory and no feasible point exists.
    Infeasible,
    /// The equality constraints are linearly dependent while consistent.
    RankDeficient,
    /// Hit the maximum iteration, which suggests numerical degeneracy.
    NumericalDegeneracy,

    /// Found an invalid size of a problem operand.
    SizeMismatch,
    /// Shortage of work slice length.
    WorkShortage,
}

impl core::fmt::Display for SolverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            SolverError::NotPositiveDefinite => "NotPositiveDefinite: objective matrix is not positive definite",
            SolverError::Infeasible          => "Infeasible: constraints are contradictory",
            SolverError::RankDeficient       => "RankDeficient: equality constraints are linearly dependent",
            SolverError::NumericalDegeneracy => "NumericalDegeneracy: hit maximum iteration",
            SolverError::SizeMismatch        => "SizeMismatch: invalid size of a problem operand",
            SolverError::WorkShortage        => "WorkShortage: shortage of work slice length",
        })
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for SolverError {}
