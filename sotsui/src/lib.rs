/*!
Sotsui ([双対](https://en.wikipedia.org/wiki/Duality_(optimization)) in Japanese) means duality.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust provides **a strictly convex quadratic program solver** on top of [`sotsui_core`].

# General usage

1. An optimization problem you want to solve is assumed to be expressed
   in the standard form of a QP with a positive definite objective matrix.
   Refer to [`ProbQP`] about its mathematical formulation.
1. Choose a [`sotsui_core::LinAlgEx`] implementation to use:
   * [`prelude::FloatGeneric`] -
     `num::Float`-generic, pure Rust, fewer environment-dependent problems.
1. Construct your problem with matrices using [`MatBuild`].
1. Create a [`prelude::Solver`] instance and optionally set its parameters.
1. Feed the problem to the solver and invoke [`prelude::Solver::solve`] to get a resulted solution.

# Examples

A simple QP problem:
\\[
\begin{array}{ll}
{\rm minimize} & 2 x_0^2 + 2 x_1^2 - 2 x_0 x_1 + 6 x_0 \\\\
{\rm subject \ to} & x_0 + x_1 = 3 \\\\
& x_0 \ge 0, \quad x_1 \ge 0, \quad x_0 + x_1 \ge 2
\end{array}
\\]

The equality constraint leaves a single degree of freedom,
along which the objective attains its minimum at \\((1, 2)\\)
while all inequality constraints stay inactive.

```
use float_eq::assert_float_eq;
use sotsui::prelude::*;
use sotsui::*;

//env_logger::init(); // Use any logger crate as `sotsui` uses `log` crate.

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;
type AProbQP = ProbQP<La>;
type ASolver = Solver<La>;

let n = 2; // x0, x1
let m = 1;
let p = 3;

// 2*x0^2 + 2*x1^2 - 2*x0*x1 + 6*x0
let mut sym_g = AMatBuild::new(MatType::SymPack(n));
sym_g[(0, 0)] = 4.;
sym_g[(0, 1)] = -2.;
sym_g[(1, 1)] = 4.;

let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
vec_g0[(0, 0)] = 6.;

// x0 + x1 - 3 = 0
let mut mat_ce = AMatBuild::new(MatType::General(n, m));
mat_ce[(0, 0)] = 1.;
mat_ce[(1, 0)] = 1.;

let mut vec_ce0 = AMatBuild::new(MatType::General(m, 1));
vec_ce0[(0, 0)] = -3.;

// x0 >= 0, x1 >= 0, x0 + x1 - 2 >= 0
let mut mat_ci = AMatBuild::new(MatType::General(n, p));
mat_ci[(0, 0)] = 1.;
mat_ci[(1, 1)] = 1.;
mat_ci[(0, 2)] = 1.;
mat_ci[(1, 2)] = 1.;

let mut vec_ci0 = AMatBuild::new(MatType::General(p, 1));
vec_ci0[(2, 0)] = -2.;

let s = ASolver::new();
let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
let rslt = s.solve(qp.problem()).unwrap();

assert_float_eq!(rslt.0[0..2], [1., 2.].as_ref(), abs_all <= 1e-9);
assert_float_eq!(rslt.1[0], 6., abs <= 1e-9); // equality constraint multiplier
assert_float_eq!(rslt.2, 12., abs <= 1e-9);
```
*/

mod matbuild;

pub use matbuild::*;

//

mod problem;

pub use problem::*;

//

/// Prelude
pub mod prelude
{
   pub use sotsui_core::solver::{Solver, SolverError, SolverParam};
   pub use sotsui_core::{FloatGeneric, MatType};
}
