use num_traits::Zero;
use sotsui_core::LinAlgEx;
use sotsui_core::solver::Solver;
use sotsui_core::MatOp;
use crate::MatBuild;

//

/// Quadratic program
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// The problem is
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \frac{1}{2} x^T G x + g_0^T x \\\\
/// {\rm subject \ to} & C_E^T x + c_{e0} = 0 \\\\
/// & C_I^T x + c_{i0} \ge 0,
/// \end{array}
/// \\]
/// where
/// - variables \\( x \in \mathbb{R}^n \\)
/// - \\( G \in \mathcal{S}\_{++}^n,\ g_0 \in \mathbb{R}^n \\)
/// - \\( C_E \in \mathbb{R}^{n \times m},\ c_{e0} \in \mathbb{R}^m \\)
/// - \\( C_I \in \mathbb{R}^{n \times p},\ c_{i0} \in \mathbb{R}^p \\).
///
/// The object keeps the problem matrices and the work slices that
/// [`Solver::solve`] borrows, resized on each [`ProbQP::problem`] call.
pub struct ProbQP<L: LinAlgEx>
{
    sym_g: MatBuild<L>,
    vec_g0: MatBuild<L>,
    mat_ce: MatBuild<L>,
    vec_ce0: MatBuild<L>,
    mat_ci: MatBuild<L>,
    vec_ci0: MatBuild<L>,

    w_solver: Vec<L::F>,
    iw_solver: Vec<usize>,
}

impl<L: LinAlgEx> ProbQP<L>
{
    /// Creates a QP with given data.
    ///
    /// Returns a [`ProbQP`] instance.
    /// * `sym_g` is \\(G\\) which shall belong to [`sotsui_core::MatType::SymPack`].
    /// * `vec_g0` is \\(g_0\\).
    /// * `mat_ce` is \\(C_E\\) whose columns are the equality constraint normals.
    /// * `vec_ce0` is \\(c_{e0}\\).
    /// * `mat_ci` is \\(C_I\\) whose columns are the inequality constraint normals.
    /// * `vec_ci0` is \\(c_{i0}\\).
    pub fn new(
        sym_g: MatBuild<L>, vec_g0: MatBuild<L>,
        mat_ce: MatBuild<L>, vec_ce0: MatBuild<L>,
        mat_ci: MatBuild<L>, vec_ci0: MatBuild<L>) -> Self
    {
        let n = vec_g0.size().0;
        let m = vec_ce0.size().0;
        let p = vec_ci0.size().0;

        assert!(sym_g.is_sympack());
        assert_eq!(sym_g.size(), (n, n));
        assert_eq!(vec_g0.size(), (n, 1));
        assert_eq!(mat_ce.size(), (n, m));
        assert_eq!(vec_ce0.size(), (m, 1));
        assert_eq!(mat_ci.size(), (n, p));
        assert_eq!(vec_ci0.size(), (p, 1));

        ProbQP {
            sym_g,
            vec_g0,
            mat_ce,
            vec_ce0,
            mat_ci,
            vec_ci0,
            w_solver: Vec::new(),
            iw_solver: Vec::new(),
        }
    }

    /// Generates the problem data structures to be fed to [`Solver::solve`].
    ///
    /// Returns a tuple of operands and work slices.
    pub fn problem(&mut self) -> (MatOp<'_, L>, &[L::F], MatOp<'_, L>, &[L::F], MatOp<'_, L>, &[L::F], &mut[L::F], &mut[usize])
    {
        let n = self.vec_g0.size().0;
        let m = self.vec_ce0.size().0;
        let p = self.vec_ci0.size().0;

        let f0 = L::F::zero();

        self.w_solver.resize(Solver::<L>::query_worklen(n, m, p), f0);
        self.iw_solver.resize(Solver::<L>::query_iworklen(n, p), 0);

        (
            self.sym_g.as_op(),
            self.vec_g0.as_ref(),
            self.mat_ce.as_op(),
            self.vec_ce0.as_ref(),
            self.mat_ci.as_op(),
            self.vec_ci0.as_ref(),
            self.w_solver.as_mut(),
            self.iw_solver.as_mut(),
        )
    }
}
