
mod linalg;
mod active_set;
mod step;
mod solver_error;
mod solver;

pub use linalg::*;
pub use solver_error::*;
pub use solver::*;
