use crate::LinAlgEx;

//

/// Matrix type and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatType
{
    /// General matrix with a number of rows and a number of columns.
    General(usize, usize),
    /// Symmetric matrix, supplied in packed form, with a number of rows and columns.
    SymPack(usize),
}

impl MatType
{
    /// Length of array to store a [`MatType`] matrix.
    ///
    /// Returns the length.
    pub fn len(&self) -> usize
    {
        match self {
            MatType::General(n_row, n_col) => n_row * n_col,
            MatType::SymPack(n) => n * (n + 1) / 2,
        }
    }

    /// Size of a [`MatType`] matrix.
    ///
    /// Returns a tuple of a number of rows and a number of columns.
    pub fn size(&self) -> (usize, usize)
    {
        match self {
            MatType::General(n_row, n_col) => (*n_row, *n_col),
            MatType::SymPack(n) => (*n, *n),
        }
    }
}

//

/// Matrix operand
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Matrix struct which borrows a slice of data array.
#[derive(Debug)]
pub struct MatOp<'a, L: LinAlgEx>
{
    typ: MatType,
    array: &'a[L::F],
}

impl<'a, L: LinAlgEx> MatOp<'a, L>
{
    /// Creates an instance
    ///
    /// Returns [`MatOp`] instance.
    /// * `typ`: Matrix type and size.
    /// * `array`: data array slice.
    ///   Column-major matrix data shall be stored if [`MatType::General`].
    ///   Symmetric packed form (the upper-triangular part in column-wise) of matrix data shall be stored if [`MatType::SymPack`].
    pub fn new(typ: MatType, array: &'a[L::F]) -> Self
    {
        assert_eq!(typ.len(), array.len());

        MatOp {
            typ, array,
        }
    }

    /// Matrix type and size.
    pub fn typ(&self) -> MatType
    {
        self.typ
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and a number of columns.
    pub fn size(&self) -> (usize, usize)
    {
        self.typ.size()
    }

    /// Calculate \\(\alpha M x + \beta y\\), where \\(M\\) is this matrix.
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `x` is a vector \\(x\\).
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry, \\(\alpha M x + \beta y\\) on exit.
    pub fn op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        self.op_impl(false, alpha, x, beta, y);
    }

    /// Calculate \\(\alpha M^T x + \beta y\\), where \\(M\\) is this matrix.
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `x` is a vector \\(x\\).
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry, \\(\alpha M^T x + \beta y\\) on exit.
    pub fn trans_op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        self.op_impl(true, alpha, x, beta, y);
    }

    /// Borrow a column of a [`MatType::General`] matrix.
    ///
    /// Returns a slice of the column.
    /// * `c` is an index of the column, which shall be less than the number of columns.
    pub fn col(&self, c: usize) -> &'a[L::F]
    {
        match self.typ {
            MatType::General(n_row, n_col) => {
                assert!(c < n_col);

                &self.array[c * n_row.. (c + 1) * n_row]
            },
            MatType::SymPack(_) => unimplemented!(),
        }
    }

    fn op_impl(&self, transpose: bool, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        match self.typ {
            MatType::General(nr, nc) => {
                if nr > 0 && nc > 0 {
                    L::transform_ge(transpose, nr, nc, alpha, self.array, x, beta, y)
                }
                else {
                    L::scale(beta, y);
                }
            },
            MatType::SymPack(n) => {
                if n > 0 {
                    L::transform_sp(n, alpha, self.array, x, beta, y)
                }
                else {
                    L::scale(beta, y);
                }
            },
        }
    }
}

impl<'a, L: LinAlgEx> AsRef<[L::F]> for MatOp<'a, L>
{
    fn as_ref(&self) -> &[L::F]
    {
        self.array
    }
}

//

#[test]
fn test_matop1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    const N: usize = 3;
    // packed upper triangle of [[3, 1, 0], [1, 3, 2], [0, 2, 3]]
    let array = [
        3.,
        1., 3.,
        0., 2., 3.,
    ];

    let m = MatOp::<L>::new(MatType::SymPack(N), &array);

    let ref_y = [
        [3., 1., 0.],
        [1., 3., 2.],
        [0., 2., 3.],
    ];

    for i in 0.. N {
        let mut x = [0.; N];
        x[i] = 1.;
        let mut y = [0.; N];

        m.op(1., &x, 0., &mut y);

        assert_float_eq!(y.as_ref(), ref_y[i].as_ref(), abs_all <= 1e-12);
    }
}

#[test]
fn test_matop2()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    // [[1, 3, 5], [2, 4, 6]] in column-major
    let array = [1., 2., 3., 4., 5., 6.];

    let m = MatOp::<L>::new(MatType::General(2, 3), &array);

    let mut y = [0.; 2];
    m.op(1., &[1., 1., 1.], 0., &mut y);
    assert_float_eq!(y.as_ref(), [9., 12.].as_ref(), abs_all <= 1e-12);

    let mut yt = [0.; 3];
    m.trans_op(1., &[1., 1.], 0., &mut yt);
    assert_float_eq!(yt.as_ref(), [3., 7., 11.].as_ref(), abs_all <= 1e-12);

    assert_float_eq!(m.col(1), [3., 4.].as_ref(), abs_all <= 1e-12);
}
