use core::marker::PhantomData;
use num_traits::Float;
use crate::solver::LinAlg;
use crate::LinAlgEx;

//

/// `f64`/`f32`-generic [`LinAlgEx`] implementation using pure Rust.
#[derive(Clone)]
pub struct FloatGeneric<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float> LinAlg for FloatGeneric<F>
{
    type F = F;

    fn norm(x: &[F]) -> F
    {
        Self::dot(x, x).sqrt()
    }

    fn copy(x: &[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());

        y.copy_from_slice(x);
    }

    fn scale(alpha: F, x: &mut[F])
    {
        for u in x {
            *u = alpha * *u;
        }
    }

    fn add(alpha: F, x: &[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());

        for (u, v) in x.iter().zip(y) {
            *v = alpha * *u + *v;
        }
    }

    fn dot(x: &[F], y: &[F]) -> F
    {
        assert_eq!(x.len(), y.len());

        let mut sum = F::zero();
        for (u, v) in x.iter().zip(y) {
            sum = sum + *u * *v;
        }
        sum
    }

    fn rot(c: F, s: F, x: &mut[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());

        // c >= 0 keeps the divisor away from zero
        let cn = s / (F::one() + c);

        for (u, v) in x.iter_mut().zip(y) {
            let t = c * *u + s * *v;
            *v = cn * (*u + t) - *v;
            *u = t;
        }
    }
}

impl<F: Float> LinAlgEx for FloatGeneric<F>
{
    fn transform_ge(transpose: bool, n_row: usize, n_col: usize, alpha: F, mat: &[F], x: &[F], beta: F, y: &mut[F])
    {
        assert_eq!(mat.len(), n_row * n_col);
        assert!(n_row > 0);

        if transpose {
            assert_eq!(x.len(), n_row);
            assert_eq!(y.len(), n_col);

            for (col, v) in mat.chunks(n_row).zip(y.iter_mut()) {
                let mut sum = F::zero();
                for (a, u) in col.iter().zip(x) {
                    sum = sum + *a * *u;
                }
                *v = alpha * sum + beta * *v;
            }
        }
        else {
            assert_eq!(x.len(), n_col);
            assert_eq!(y.len(), n_row);

            for v in y.iter_mut() {
                *v = beta * *v;
            }
            for (col, u) in mat.chunks(n_row).zip(x) {
                let au = alpha * *u;
                for (a, v) in col.iter().zip(y.iter_mut()) {
                    *v = au * *a + *v;
                }
            }
        }
    }

    fn transform_sp(n: usize, alpha: F, mat: &[F], x: &[F], beta: F, y: &mut[F])
    {
        assert_eq!(mat.len(), n * (n + 1) / 2);
        assert_eq!(x.len(), n);
        assert_eq!(y.len(), n);

        for v in y.iter_mut() {
            *v = beta * *v;
        }

        let mut top = 0;
        for c in 0.. n {
            let col = &mat[top.. top + c + 1];
            top += c + 1;

            // the strict upper part acts both as-is and transposed
            let mut sum = F::zero();
            for r in 0.. c {
                y[r] = y[r] + alpha * col[r] * x[c];
                sum = sum + col[r] * x[r];
            }
            y[c] = y[c] + alpha * (sum + col[c] * x[c]);
        }
    }

    fn cholesky_factor(n: usize, mat: &mut[F]) -> Result<(), ()>
    {
        assert_eq!(mat.len(), n * (n + 1) / 2);

        let f0 = F::zero();

        for j in 0.. n {
            let (done, col) = mat.split_at_mut(j * (j + 1) / 2);
            // col[..=j] is the j-th column, done holds the factored columns before it

            for i in 0.. j {
                let ci = i * (i + 1) / 2;
                let coli = &done[ci..= ci + i];

                let mut sum = col[i];
                for k in 0.. i {
                    sum = sum - coli[k] * col[k];
                }
                col[i] = sum / coli[i];
            }

            let mut diag = col[j];
            for k in 0.. j {
                diag = diag - col[k] * col[k];
            }
            if diag <= f0 {
                return Err(());
            }
            col[j] = diag.sqrt();
        }

        Ok(())
    }

    fn solve_tr(transpose: bool, n: usize, mat: &[F], x: &mut[F])
    {
        assert_eq!(mat.len(), n * (n + 1) / 2);
        assert_eq!(x.len(), n);

        if transpose {
            for i in 0.. n {
                let ci = i * (i + 1) / 2;
                let coli = &mat[ci..= ci + i];

                let mut sum = x[i];
                for k in 0.. i {
                    sum = sum - coli[k] * x[k];
                }
                x[i] = sum / coli[i];
            }
        }
        else {
            for i in (0.. n).rev() {
                let mut sum = x[i];
                for k in i + 1.. n {
                    sum = sum - mat[k * (k + 1) / 2 + i] * x[k];
                }
                x[i] = sum / mat[i * (i + 1) / 2 + i];
            }
        }
    }
}

//

#[test]
fn test_floatgeneric1()
{
    use float_eq::assert_float_eq;

    type La = FloatGeneric<f64>;

    // packed upper triangle of [[4, -2, 0], [-2, 4, 1], [0, 1, 2]]
    let mut mat = [4., -2., 4., 0., 1., 2.];
    let mut x = [0., 9., 8.];

    La::cholesky_factor(3, &mut mat).unwrap();
    La::solve_tr(true, 3, &mat, &mut x);
    La::solve_tr(false, 3, &mat, &mut x);

    assert_float_eq!(x.as_ref(), [1., 2., 3.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_floatgeneric2()
{
    type La = FloatGeneric<f64>;

    // packed upper triangle of [[1, 2], [2, 1]], which is indefinite
    let mut mat = [1., 2., 1.];

    assert!(La::cholesky_factor(2, &mut mat).is_err());
}

#[test]
fn test_floatgeneric3()
{
    use float_eq::assert_float_eq;

    type La = FloatGeneric<f64>;

    let mut x = [3., 1.];
    let mut y = [4., 2.];

    La::rot(0.6, 0.8, &mut x, &mut y);

    assert_float_eq!(x.as_ref(), [5., 2.2].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(y.as_ref(), [0., -0.4].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_floatgeneric4()
{
    use float_eq::assert_float_eq;

    type La = FloatGeneric<f64>;

    let mat = [4., -2., 4., 0., 1., 2.];
    let x = [1., 2., 3.];
    let mut y = [0.; 3];

    La::transform_sp(3, 1., &mat, &x, 0., &mut y);

    assert_float_eq!(y.as_ref(), [0., 9., 8.].as_ref(), abs_all <= 1e-12);
}
