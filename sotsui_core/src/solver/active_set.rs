use num_traits::{Float, Zero, One};
use crate::LinAlgEx;

//

/// Active constraint set with its factorizations, updated in-place.
///
/// Owns the factor \\(U\\) of the objective matrix \\(G=U^TU\\),
/// the inverse \\(J=U^{-1}\\) and the triangular factor \\(R\\) satisfying
/// \\(J^TN=\binom{R}{0}\\) for the matrix \\(N\\) of active constraint normals.
/// \\(J\\) and \\(R\\) are never refactorized:
/// constraints entering and leaving the set apply plane reflections only.
pub(crate) struct ActiveSet<'a, L: LinAlgEx>
{
    n: usize,
    n_act: usize,
    r_norm: L::F,
    ufact: &'a mut[L::F],
    jmat: &'a mut[L::F],
    rmat: &'a mut[L::F],
    ids: &'a mut[usize],
}

impl<'a, L: LinAlgEx> ActiveSet<'a, L>
{
    pub fn new(n: usize, ufact: &'a mut[L::F], jmat: &'a mut[L::F], rmat: &'a mut[L::F], ids: &'a mut[usize]) -> Self
    {
        assert_eq!(ufact.len(), n * (n + 1) / 2);
        assert_eq!(jmat.len(), n * n);
        assert_eq!(rmat.len(), n * n);
        assert_eq!(ids.len(), n + 1);

        ActiveSet {
            n,
            n_act: 0,
            r_norm: L::F::one(),
            ufact, jmat, rmat, ids,
        }
    }

    /// Number of active constraints.
    pub fn len(&self) -> usize
    {
        self.n_act
    }

    /// Ids of the active constraints in positional order.
    pub fn ids(&self) -> &[usize]
    {
        &self.ids[.. self.n_act]
    }

    /// Factorize the objective matrix and reset the active set to empty.
    ///
    /// Returns traces of the objective matrix and of \\(J\\),
    /// whose product estimates the problem scale,
    /// or `Err` if the matrix is not positive definite.
    /// * `sym` is the objective matrix in packed form.
    pub fn factorize(&mut self, sym: &[L::F]) -> Result<(L::F, L::F), ()>
    {
        assert_eq!(sym.len(), self.ufact.len());

        let f0 = L::F::zero();
        let f1 = L::F::one();
        let n = self.n;

        let mut c1 = f0;
        for c in 0.. n {
            c1 = c1 + sym[c * (c + 1) / 2 + c];
        }

        L::copy(sym, self.ufact);
        L::cholesky_factor(n, self.ufact)?;

        // J = U^{-1}, one column per back substitution
        let mut c2 = f0;
        for c in 0.. n {
            let col = &mut self.jmat[c * n.. (c + 1) * n];
            for v in col.iter_mut() {
                *v = f0;
            }
            col[c] = f1;
            L::solve_tr(false, n, self.ufact, col);
            c2 = c2 + col[c];
        }

        for v in self.rmat.iter_mut() {
            *v = f0;
        }
        self.n_act = 0;
        self.r_norm = f1;

        Ok((c1, c2))
    }

    /// x := G^{-1} x through the factor of the objective matrix.
    pub fn solve_obj(&self, x: &mut[L::F])
    {
        L::solve_tr(true, self.n, self.ufact, x);
        L::solve_tr(false, self.n, self.ufact, x);
    }

    /// Record a candidate constraint id at the one-past-end slot,
    /// so that removals keep it in place until the candidate commits.
    pub fn set_candidate(&mut self, id: usize)
    {
        self.ids[self.n_act] = id;
    }

    /// Split a constraint normal against the active set.
    ///
    /// * `np` is the constraint normal.
    /// * `d` is \\(J^Tn_p\\) on exit.
    /// * `z` is the step direction on exit,
    ///   the projection of `np` onto the null space of the active normals.
    /// * `r` is the multiplier change rate on exit (the leading [`ActiveSet::len`] part),
    ///   solving the leading triangle of \\(R\\) against the head of `d`.
    pub fn project(&self, np: &[L::F], d: &mut[L::F], z: &mut[L::F], r: &mut[L::F])
    {
        assert_eq!(np.len(), self.n);
        assert_eq!(d.len(), self.n);
        assert_eq!(z.len(), self.n);
        assert_eq!(r.len(), self.n);

        let f0 = L::F::zero();
        let f1 = L::F::one();
        let n = self.n;
        let nact = self.n_act;

        L::transform_ge(true, n, n, f1, self.jmat, np, f0, d);
        L::transform_ge(false, n, n - nact, f1, &self.jmat[nact * n..], &d[nact..], f0, z);

        for i in (0.. nact).rev() {
            let mut sum = d[i];
            for k in i + 1.. nact {
                sum = sum - self.rmat[k * n + i] * r[k];
            }
            r[i] = sum / self.rmat[i * n + i];
        }
    }

    /// Commit the candidate constraint whose `d` was given by [`ActiveSet::project`].
    ///
    /// Reduces the tail of `d` onto the new diagonal of \\(R\\) by plane reflections,
    /// applied to the columns of \\(J\\) as well.
    /// Returns `Err` without committing if the new diagonal is negligible
    /// relative to the largest one so far,
    /// which means the candidate normal linearly depends on the active normals.
    pub fn add(&mut self, d: &mut[L::F], eps_zero: L::F) -> Result<(), ()>
    {
        assert_eq!(d.len(), self.n);

        let f0 = L::F::zero();
        let n = self.n;
        let nact = self.n_act;

        if nact >= n {
            return Err(());
        }

        for j in (nact + 1.. n).rev() {
            let mut cc = d[j - 1];
            let mut ss = d[j];
            let h = cc.hypot(ss);
            if h <= f0 {
                continue;
            }
            d[j] = f0;
            ss = ss / h;
            cc = cc / h;
            if cc < f0 {
                cc = -cc;
                ss = -ss;
                d[j - 1] = -h;
            }
            else {
                d[j - 1] = h;
            }

            let (jl, jr) = self.jmat.split_at_mut(j * n);
            L::rot(cc, ss, &mut jl[(j - 1) * n..], &mut jr[.. n]);
        }

        if d[nact].abs() <= eps_zero * self.r_norm {
            return Err(());
        }

        L::copy(&d[..= nact], &mut self.rmat[nact * n..= nact * n + nact]);
        self.r_norm = self.r_norm.max(d[nact].abs());
        self.n_act += 1;

        Ok(())
    }

    /// Remove the active constraint at a position.
    ///
    /// Shifts the constraints above down a position
    /// and restores \\(R\\) to triangular by plane reflections,
    /// applied to the columns of \\(J\\) as well.
    /// * `pos` is the position to remove, which shall be less than [`ActiveSet::len`].
    /// * `u` is the multiplier vector, kept in sync with the shift
    ///   including the candidate scratch at the one-past-end slot.
    pub fn remove(&mut self, pos: usize, u: &mut[L::F])
    {
        assert!(pos < self.n_act);
        assert_eq!(u.len(), self.n + 1);

        let f0 = L::F::zero();
        let f1 = L::F::one();
        let n = self.n;

        for i in pos.. self.n_act - 1 {
            self.ids[i] = self.ids[i + 1];
            u[i] = u[i + 1];
            self.rmat.copy_within((i + 1) * n.. (i + 2) * n, i * n);
        }
        self.ids[self.n_act - 1] = self.ids[self.n_act];
        u[self.n_act - 1] = u[self.n_act];
        for v in self.rmat[(self.n_act - 1) * n.. self.n_act * n].iter_mut() {
            *v = f0;
        }
        self.n_act -= 1;

        if self.n_act == 0 {
            return;
        }

        for j in pos.. self.n_act {
            let mut cc = self.rmat[j * n + j];
            let mut ss = self.rmat[j * n + j + 1];
            let h = cc.hypot(ss);
            if h <= f0 {
                continue;
            }
            cc = cc / h;
            ss = ss / h;
            self.rmat[j * n + j + 1] = f0;
            if cc < f0 {
                cc = -cc;
                ss = -ss;
                self.rmat[j * n + j] = -h;
            }
            else {
                self.rmat[j * n + j] = h;
            }

            let cn = ss / (f1 + cc);
            for k in j + 1.. self.n_act {
                let t1 = self.rmat[k * n + j];
                let t2 = self.rmat[k * n + j + 1];
                self.rmat[k * n + j] = t1 * cc + t2 * ss;
                self.rmat[k * n + j + 1] = cn * (t1 + self.rmat[k * n + j]) - t2;
            }

            let (jl, jr) = self.jmat.split_at_mut((j + 1) * n);
            L::rot(cc, ss, &mut jl[j * n..], &mut jr[.. n]);
        }
    }
}

//

#[test]
fn test_active_set1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    const N: usize = 2;
    let mut ufact = [0.; N * (N + 1) / 2];
    let mut jmat = [0.; N * N];
    let mut rmat = [0.; N * N];
    let mut ids = [0; N + 1];

    let mut aset = ActiveSet::<L>::new(N, &mut ufact, &mut jmat, &mut rmat, &mut ids);

    // identity objective matrix
    let (c1, c2) = aset.factorize(&[1., 0., 1.]).unwrap();
    assert_float_eq!(c1, 2., abs <= 1e-12);
    assert_float_eq!(c2, 2., abs <= 1e-12);

    let mut d = [0.; N];
    let mut z = [0.; N];
    let mut r = [0.; N];
    let mut u = [0.; N + 1];

    // first normal enters as a whole
    aset.project(&[1., 0.], &mut d, &mut z, &mut r);
    assert_float_eq!(z.as_ref(), [1., 0.].as_ref(), abs_all <= 1e-12);
    aset.set_candidate(5);
    aset.add(&mut d, 1e-12).unwrap();
    assert_eq!(aset.len(), 1);
    assert_eq!(aset.ids(), &[5]);
    u[0] = 2.;

    // the same normal again is dependent
    aset.project(&[1., 0.], &mut d, &mut z, &mut r);
    assert_float_eq!(z.as_ref(), [0., 0.].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(r[0], 1., abs <= 1e-12);
    aset.set_candidate(7);
    assert!(aset.add(&mut d, 1e-12).is_err());
    assert_eq!(aset.len(), 1);

    // an independent normal enters with its null-space part
    aset.project(&[1., 1.], &mut d, &mut z, &mut r);
    assert_float_eq!(z.as_ref(), [0., 1.].as_ref(), abs_all <= 1e-12);
    aset.set_candidate(9);
    aset.add(&mut d, 1e-12).unwrap();
    assert_eq!(aset.ids(), &[5, 9]);
    u[1] = 3.;

    // removal keeps the remaining factor consistent
    aset.remove(0, &mut u);
    assert_eq!(aset.len(), 1);
    assert_eq!(aset.ids(), &[9]);
    assert_float_eq!(u[0], 3., abs <= 1e-12);

    aset.project(&[1., 1.], &mut d, &mut z, &mut r);
    assert_float_eq!(z.as_ref(), [0., 0.].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(r[0], 1., abs <= 1e-12);
}
