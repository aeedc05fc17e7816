use crate::solver::LinAlg;

/// Linear algebra extended subtrait.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
pub trait LinAlgEx: LinAlg + Clone
{
    /// Calculate \\(\alpha G x + \beta y\\),
    /// where \\(G\\) is a dense general matrix.
    ///
    /// * If `transpose` is `true`, Calculate \\(\alpha G^T x + \beta y\\) instead.
    /// * `n_row` is a number of rows of \\(G\\).
    /// * `n_col` is a number of columns of \\(G\\).
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `mat` is a matrix \\(G\\), stored in column-major.
    ///   The length of `mat` shall be `n_row * n_col`.
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be `n_col` (or `n_row` if `transpose` is `true`).
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry, \\(\alpha G x + \beta y\\) on exit.
    ///   The length of `y` shall be `n_row` (or `n_col` if `transpose` is `true`).
    fn transform_ge(transpose: bool, n_row: usize, n_col: usize, alpha: Self::F, mat: &[Self::F], x: &[Self::F], beta: Self::F, y: &mut[Self::F]);

    /// Calculate \\(\alpha S x + \beta y\\),
    /// where \\(S\\) is a symmetric matrix, supplied in packed form.
    ///
    /// * `n` is a number of rows and columns of \\(S\\).
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `mat` is a matrix \\(S\\), stored in packed form (the upper-triangular part in column-wise).
    ///   The length of `mat` shall be `n * (n + 1) / 2`.
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be `n`.
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry, \\(\alpha S x + \beta y\\) on exit.
    ///   The length of `y` shall be `n`.
    fn transform_sp(n: usize, alpha: Self::F, mat: &[Self::F], x: &[Self::F], beta: Self::F, y: &mut[Self::F]);

    /// Factorize a symmetric positive definite matrix \\(S\\) into \\(S=U^TU\\) in-place,
    /// where \\(U\\) is upper triangular.
    ///
    /// Returns `Err` if a pivot of the factorization is not positive,
    /// which means \\(S\\) is not positive definite.
    /// * `n` is a number of rows and columns of \\(S\\).
    /// * `mat` is a matrix \\(S\\) in packed form before entry, \\(U\\) in packed form on exit.
    ///   The length of `mat` shall be `n * (n + 1) / 2`.
    fn cholesky_factor(n: usize, mat: &mut[Self::F]) -> Result<(), ()>;

    /// Solve \\(Ux=b\\) by back substitution,
    /// where \\(U\\) is upper triangular with nonzero diagonal.
    ///
    /// * If `transpose` is `true`, solve \\(U^Tx=b\\) instead.
    /// * `n` is a number of rows and columns of \\(U\\).
    /// * `mat` is a matrix \\(U\\), stored in packed form (the upper-triangular part in column-wise).
    ///   The length of `mat` shall be `n * (n + 1) / 2`.
    /// * `x` is a vector \\(b\\) before entry, \\(x\\) on exit.
    ///   The length of `x` shall be `n`.
    fn solve_tr(transpose: bool, n: usize, mat: &[Self::F], x: &mut[Self::F]);
}
