use core::fmt::{Debug, LowerExp};
use num_traits::{Float, Zero, One, NumCast};
use crate::{LinAlgEx, MatOp, MatType};
use super::solver_error::SolverError;
use super::active_set::ActiveSet;
use super::step::step_lengths;

//

/// Solver parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParam<F: Float>
{
    /// Maximum number of steps. `None` means no upper limit.
    pub max_iter: Option<usize>,
    /// Tolerance of the constraint violation, relative to the problem scale.
    pub eps_feas: F,
    /// Tolerance of small positive values, guarding divisions and deciding rank deficiency.
    pub eps_zero: F,
}

impl<F: Float> Default for SolverParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        SolverParam {
            max_iter: Some(10_000_000),
            eps_feas: ten.powi(-9),
            eps_zero: ten.powi(-12),
        }
    }
}

//

const MARK_FREE: usize = 0;
const MARK_ACTIVE: usize = 1;
const MARK_EXCLUDED: usize = 2;

//

/// Dual active-set solver for strictly convex quadratic programs.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
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
/// * variables \\( x \in \mathbb{R}^n \\)
/// * \\( G \in \mathcal{S}\_{++}^n,\ g_0 \in \mathbb{R}^n \\)
/// * \\( C_E \in \mathbb{R}^{n \times m},\ c_{e0} \in \mathbb{R}^m \\)
/// * \\( C_I \in \mathbb{R}^{n \times p},\ c_{i0} \in \mathbb{R}^p \\).
///
/// The method starts at the unconstrained minimum and keeps dual feasibility:
/// a violated constraint enters the active set while blocking constraints leave it,
/// until all constraints are satisfied.
/// Each change of the active set updates the factorizations in-place by plane reflections.
///
/// D. Goldfarb and A. Idnani,
/// "A numerically stable dual method for solving strictly convex quadratic programs,"
/// Mathematical Programming 27 (1983) 1-33.
pub struct Solver<L: LinAlgEx>
{
    /// solver parameters.
    pub par: SolverParam<L::F>,
}

impl<L: LinAlgEx> Solver<L>
{
    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`Solver::solve`] requires.
    /// * `n` is a number of variables.
    /// * `m` is a number of equality constraints.
    /// * `p` is a number of inequality constraints.
    pub fn query_worklen(n: usize, m: usize, p: usize) -> usize
    {
        n +                // x
        m + p +            // multipliers
        n * (n + 1) / 2 +  // factored objective matrix
        n * n +            // J
        n * n +            // R
        n +                // d
        n +                // z
        n +                // r
        n + 1 +            // u
        n + 1 +            // u backup
        n +                // x backup
        p                  // constraint values
    }

    /// Query of a length of integer work slice.
    ///
    /// Returns a length of integer work slice that [`Solver::solve`] requires.
    /// * `n` is a number of variables.
    /// * `p` is a number of inequality constraints.
    pub fn query_iworklen(n: usize, p: usize) -> usize
    {
        n + 1 +            // active constraint ids
        p                  // inequality marks
    }

    /// Creates an instance.
    ///
    /// Returns the [`Solver`] instance with default parameters.
    pub fn new() -> Self
    {
        Solver {
            par: SolverParam::default(),
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns the [`Solver`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SolverParam<L::F>)
    {
        f(&mut self.par);
        self
    }
}

impl<L: LinAlgEx> Solver<L>
where L::F: Float + Debug + LowerExp
{
    /// Starts to solve a quadratic program by the dual active-set method.
    ///
    /// Returns `Ok` with a tuple of
    /// the optimal \\(x\\),
    /// the Lagrange multipliers of the equality and inequality constraints in order
    /// and the optimal objective value,
    /// or `Err` with a [`SolverError`].
    /// The problem operands are not mutated.
    /// * `sym_g` is \\(G\\) as a [`MatType::SymPack`] matrix, which shall be positive definite.
    /// * `vec_g0` is \\(g_0\\) of length \\(n\\).
    /// * `mat_ce` is \\(C_E\\) as a [`MatType::General`] \\(n \times m\\) matrix,
    ///   whose columns are the equality constraint normals.
    /// * `vec_ce0` is \\(c_{e0}\\) of length \\(m\\).
    /// * `mat_ci` is \\(C_I\\) as a [`MatType::General`] \\(n \times p\\) matrix,
    ///   whose columns are the inequality constraint normals.
    /// * `vec_ci0` is \\(c_{i0}\\) of length \\(p\\).
    /// * `work` shall have a length of [`Solver::query_worklen`] at least.
    /// * `iwork` shall have a length of [`Solver::query_iworklen`] at least.
    pub fn solve<'w>(self,
        (sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0, work, iwork):
        (MatOp<'_, L>, &[L::F], MatOp<'_, L>, &[L::F], MatOp<'_, L>, &[L::F], &'w mut[L::F], &mut[usize])
    ) -> Result<(&'w[L::F], &'w[L::F], L::F), SolverError>
    {
        let (n, _) = sym_g.size();
        let (_, m) = mat_ce.size();
        let (_, p) = mat_ci.size();

        if n == 0 || !matches!(sym_g.typ(), MatType::SymPack(_)) {
            log::error!("sym_g type {:?} must be a nonempty SymPack", sym_g.typ());
            return Err(SolverError::SizeMismatch);
        }
        if vec_g0.len() != n {
            log::error!("vec_g0 length {} must be {}", vec_g0.len(), n);
            return Err(SolverError::SizeMismatch);
        }
        if mat_ce.size() != (n, m) {
            log::error!("mat_ce size {:?} must be {:?}", mat_ce.size(), (n, m));
            return Err(SolverError::SizeMismatch);
        }
        if vec_ce0.len() != m {
            log::error!("vec_ce0 length {} must be {}", vec_ce0.len(), m);
            return Err(SolverError::SizeMismatch);
        }
        if mat_ci.size() != (n, p) {
            log::error!("mat_ci size {:?} must be {:?}", mat_ci.size(), (n, p));
            return Err(SolverError::SizeMismatch);
        }
        if vec_ci0.len() != p {
            log::error!("vec_ci0 length {} must be {}", vec_ci0.len(), p);
            return Err(SolverError::SizeMismatch);
        }

        if Self::query_worklen(n, m, p) > work.len() {
            log::error!("work length {} must be {} at least", work.len(), Self::query_worklen(n, m, p));
            return Err(SolverError::WorkShortage);
        }
        if Self::query_iworklen(n, p) > iwork.len() {
            log::error!("iwork length {} must be {} at least", iwork.len(), Self::query_iworklen(n, p));
            return Err(SolverError::WorkShortage);
        }

        log::debug!("{:?}", self.par);

        let core = SolverCore {
            par: self.par,
            sym_g, vec_g0,
            mat_ce, vec_ce0,
            mat_ci, vec_ci0,
        };

        let rslt = core.solve(work, iwork);

        match rslt {
            Ok(obj) => {
                let (sol_x, spl_work) = work.split_at(n);
                let (sol_lagr, _) = spl_work.split_at(m + p);
                Ok((sol_x, sol_lagr, obj))
            },
            Err(e) => Err(e),
        }
    }
}

//

struct SolverCore<'a, L: LinAlgEx>
where L::F: Float + Debug + LowerExp
{
    par: SolverParam<L::F>,
    sym_g: MatOp<'a, L>,
    vec_g0: &'a[L::F],
    mat_ce: MatOp<'a, L>,
    vec_ce0: &'a[L::F],
    mat_ci: MatOp<'a, L>,
    vec_ci0: &'a[L::F],
}

impl<'a, L: LinAlgEx> SolverCore<'a, L>
where L::F: Float + Debug + LowerExp
{
    fn dim(&self) -> (usize, usize, usize)
    {
        let (n, _) = self.sym_g.size();
        let (_, m) = self.mat_ce.size();
        let (_, p) = self.mat_ci.size();

        (n, m, p)
    }

    fn solve(self, work: &mut[L::F], iwork: &mut[usize]) -> Result<L::F, SolverError>
    {
        let (n, m, p) = self.dim();

        let f0 = L::F::zero();
        let f1 = L::F::one();
        let f2 = f1 + f1;

        log::info!("----- Initializing");
        log::debug!("size n {} m {} p {}", n, m, p);

        let (x, spl) = work.split_at_mut(n);
        let (lagr, spl) = spl.split_at_mut(m + p);
        let (ufact, spl) = spl.split_at_mut(n * (n + 1) / 2);
        let (jmat, spl) = spl.split_at_mut(n * n);
        let (rmat, spl) = spl.split_at_mut(n * n);
        let (d, spl) = spl.split_at_mut(n);
        let (z, spl) = spl.split_at_mut(n);
        let (r, spl) = spl.split_at_mut(n);
        let (u, spl) = spl.split_at_mut(n + 1);
        let (u_old, spl) = spl.split_at_mut(n + 1);
        let (x_old, spl) = spl.split_at_mut(n);
        let (s, _) = spl.split_at_mut(p);

        let (ids, spl_i) = iwork.split_at_mut(n + 1);
        let (mark, _) = spl_i.split_at_mut(p);

        for v in lagr.iter_mut() {
            *v = f0;
        }
        for v in u.iter_mut() {
            *v = f0;
        }

        let mut aset = ActiveSet::<L>::new(n, ufact, jmat, rmat, ids);

        let (c1, c2) = aset.factorize(self.sym_g.as_ref()).map_err(|_| {
            log::warn!("----- NotPositiveDefinite");
            SolverError::NotPositiveDefinite
        })?;

        // unconstrained minimum
        L::copy(self.vec_g0, x);
        aset.solve_obj(x);
        L::scale(-f1, x);
        let mut obj = L::dot(self.vec_g0, x) / f2;

        // traces of the objective matrix and its inverse factor estimate the problem scale,
        // which makes the feasibility tolerance relative
        let feas_tol = self.par.eps_feas * (f1 + (c1 * c2).abs());

        log::debug!("unconstrained minimum {:.2e}", obj);
        log::trace!("x {:?}", x);

        // equality constraints enter the active set unconditionally
        for i in 0.. m {
            let np = self.mat_ce.col(i);
            aset.project(np, d, z, r);

            let ztn = L::dot(z, np);
            let resid = L::dot(np, x) + self.vec_ce0[i];
            let t2 = if ztn > self.par.eps_zero {-resid / ztn} else {f0};

            L::add(t2, z, x);
            let nact = aset.len();
            L::add(-t2, &r[.. nact], &mut u[.. nact]);
            u[nact] = t2;
            obj = obj + t2 * ztn * (t2 / f2);

            aset.set_candidate(i);
            if aset.add(d, self.par.eps_zero).is_err() {
                // a dependent equality is redundant if satisfied, contradictory otherwise
                let viol = (L::dot(np, x) + self.vec_ce0[i]).abs();
                if viol > feas_tol {
                    log::warn!("----- Infeasible");
                    return Err(SolverError::Infeasible);
                }
                else {
                    log::warn!("----- RankDeficient");
                    return Err(SolverError::RankDeficient);
                }
            }

            log::debug!("equality {} step {:.2e}", i, t2);
        }

        log::info!("----- Started");

        let viol_thresh = <L::F as NumCast>::from(p).unwrap() * feas_tol;
        let mut iter = 0;

        'outer: loop {
            // inequality constraint values at the iterate
            L::copy(self.vec_ci0, s);
            self.mat_ci.trans_op(f1, x, f1, s);

            let mut psi = f0;
            for v in s.iter() {
                psi = psi + v.min(f0);
            }

            for v in mark.iter_mut() {
                *v = MARK_FREE;
            }
            for pos in 0.. aset.len() {
                let id = aset.ids()[pos];
                if id >= m {
                    mark[id - m] = MARK_ACTIVE;
                }
            }

            log::debug!("{}: psi {:.2e} active {}", iter, psi, aset.len());
            log::trace!("{}: x {:?}", iter, x);

            if psi.abs() <= viol_thresh {
                break 'outer;
            }

            // snapshot for rollback on a degenerate candidate;
            // positional restore stays valid only while nothing was dropped
            L::copy(x, x_old);
            L::copy(u, u_old);
            let obj_old = obj;
            let mut dropped = false;

            'select: loop {
                // the most violated free inequality becomes the candidate
                let mut smin = f0;
                let mut sel = None;
                for k in 0.. p {
                    if mark[k] == MARK_FREE && s[k] < smin {
                        smin = s[k];
                        sel = Some(k);
                    }
                }
                let ip = match sel {
                    Some(k) => k,
                    None => break 'outer,
                };

                let np = self.mat_ci.col(ip);
                aset.set_candidate(m + ip);
                u[aset.len()] = f0;

                log::debug!("{}: candidate {} violation {:.2e}", iter, ip, smin);

                // step until the candidate commits or no progress remains
                loop {
                    if let Some(max_iter) = self.par.max_iter {
                        if iter >= max_iter {
                            log::warn!("----- NumericalDegeneracy");
                            return Err(SolverError::NumericalDegeneracy);
                        }
                    }
                    iter += 1;

                    aset.project(np, d, z, r);
                    let ztn = L::dot(z, np);
                    let nact = aset.len();

                    let step = step_lengths::<L>(u, r, ztn, s[ip], m, nact, self.par.eps_zero);

                    match (step.full, step.part) {
                        (None, None) => {
                            log::warn!("----- Infeasible");
                            return Err(SolverError::Infeasible);
                        },
                        (None, Some((t1, blk))) => {
                            // dual step only, a blocking constraint leaves
                            L::add(-t1, &r[.. nact], &mut u[.. nact]);
                            u[nact] = u[nact] + t1;
                            let id = aset.ids()[blk];
                            mark[id - m] = MARK_FREE;
                            aset.remove(blk, u);
                            dropped = true;

                            log::debug!("{}: dual step {:.2e} drops {}", iter, t1, id - m);
                        },
                        (Some(t2), part) => {
                            let partial = match part {
                                Some((t1, blk)) if t1 < t2 - self.par.eps_zero => Some((t1, blk)),
                                _ => None,
                            };
                            let t = match partial {
                                Some((t1, _)) => t1,
                                None => t2,
                            };

                            L::add(t, z, x);
                            obj = obj + t * ztn * (t / f2 + u[nact]);
                            L::add(-t, &r[.. nact], &mut u[.. nact]);
                            u[nact] = u[nact] + t;

                            match partial {
                                Some((_, blk)) => {
                                    // blocked before the candidate boundary
                                    let id = aset.ids()[blk];
                                    mark[id - m] = MARK_FREE;
                                    aset.remove(blk, u);
                                    dropped = true;

                                    s[ip] = L::dot(np, x) + self.vec_ci0[ip];

                                    log::debug!("{}: partial step {:.2e} drops {}", iter, t, id - m);
                                },
                                None => {
                                    // the candidate boundary is reached
                                    if aset.add(d, self.par.eps_zero).is_ok() {
                                        mark[ip] = MARK_ACTIVE;
                                        log::debug!("{}: full step {:.2e}", iter, t);
                                        continue 'outer;
                                    }

                                    // a degenerate candidate is excluded until the next scan
                                    mark[ip] = MARK_EXCLUDED;
                                    if !dropped {
                                        L::copy(x_old, x);
                                        L::copy(u_old, u);
                                        obj = obj_old;
                                    }
                                    else {
                                        // the iterate moved for good, refresh the constraint values
                                        L::copy(self.vec_ci0, s);
                                        self.mat_ci.trans_op(f1, x, f1, s);
                                    }

                                    log::debug!("{}: degenerate candidate {}", iter, ip);
                                    continue 'select;
                                },
                            }
                        },
                    }
                }
            }
        }

        // multipliers write-back by constraint id
        for pos in 0.. aset.len() {
            lagr[aset.ids()[pos]] = u[pos];
        }

        log::debug!("{} steps, {} active constraints", iter, aset.len());
        log::trace!("multipliers {:?}", lagr);
        log::info!("----- Optimal");

        Ok(obj)
    }
}

//

#[test]
fn test_solver1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let n = 2;
    let m = 1;
    let p = 3;

    let sym_g = MatOp::<L>::new(MatType::SymPack(n), &[4., -2., 4.]);
    let vec_g0 = [6., 0.];
    let mat_ce = MatOp::<L>::new(MatType::General(n, m), &[1., 1.]);
    let vec_ce0 = [-3.];
    let mat_ci = MatOp::<L>::new(MatType::General(n, p), &[1., 0., 0., 1., 1., 1.]);
    let vec_ci0 = [0., 0., -2.];

    let mut work = [0.; 34];
    assert_eq!(Solver::<L>::query_worklen(n, m, p), work.len());
    let mut iwork = [0; 6];
    assert_eq!(Solver::<L>::query_iworklen(n, p), iwork.len());

    let s = Solver::<L>::new();
    let rslt = s.solve((sym_g, &vec_g0, mat_ce, &vec_ce0, mat_ci, &vec_ci0, &mut work, &mut iwork)).unwrap();

    assert_float_eq!(rslt.0, [1., 2.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [6., 0., 0., 0.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, 12., abs <= 1e-9);
}

#[test]
fn test_solver2()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    // x >= 1 and -x >= 0 cannot hold together
    let sym_g = MatOp::<L>::new(MatType::SymPack(1), &[1.]);
    let vec_g0 = [0.];
    let mat_ce = MatOp::<L>::new(MatType::General(1, 0), &[]);
    let vec_ce0: &[f64] = &[];
    let mat_ci = MatOp::<L>::new(MatType::General(1, 2), &[1., -1.]);
    let vec_ci0 = [-1., 0.];

    let mut work = [0.; 16];
    let mut iwork = [0; 4];

    let s = Solver::<L>::new();
    let rslt = s.solve((sym_g, &vec_g0, mat_ce, vec_ce0, mat_ci, &vec_ci0, &mut work, &mut iwork));

    assert_eq!(rslt, Err(SolverError::Infeasible));
}

#[test]
fn test_solver3()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    // vec_g0 longer than the order of sym_g
    let sym_g = MatOp::<L>::new(MatType::SymPack(2), &[4., -2., 4.]);
    let vec_g0 = [6., 0., 0.];
    let mat_ce = MatOp::<L>::new(MatType::General(2, 0), &[]);
    let vec_ce0: &[f64] = &[];
    let mat_ci = MatOp::<L>::new(MatType::General(2, 0), &[]);
    let vec_ci0: &[f64] = &[];

    let mut work = [0.; 27];
    let mut iwork = [0; 3];

    let s = Solver::<L>::new();
    let rslt = s.solve((sym_g, &vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0, &mut work, &mut iwork));

    assert_eq!(rslt, Err(SolverError::SizeMismatch));
}

#[test]
fn test_solver4()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let n = 2;
    let m = 1;
    let p = 3;

    let sym_g = MatOp::<L>::new(MatType::SymPack(n), &[4., -2., 4.]);
    let vec_g0 = [6., 0.];
    let mat_ce = MatOp::<L>::new(MatType::General(n, m), &[1., 1.]);
    let vec_ce0 = [-3.];
    let mat_ci = MatOp::<L>::new(MatType::General(n, p), &[1., 0., 0., 1., 1., 1.]);
    let vec_ci0 = [0., 0., -2.];

    // one element shorter than the required work length
    let mut work = [0.; 33];
    assert_eq!(Solver::<L>::query_worklen(n, m, p), work.len() + 1);
    let mut iwork = [0; 6];

    let s = Solver::<L>::new();
    let rslt = s.solve((sym_g, &vec_g0, mat_ce, &vec_ce0, mat_ci, &vec_ci0, &mut work, &mut iwork));

    assert_eq!(rslt, Err(SolverError::WorkShortage));
}
