use float_eq::assert_float_eq;
use sotsui::prelude::*;
use sotsui::*;

type La = FloatGeneric<f64>;

type AMatBuild = MatBuild<La>;
type AProbQP = ProbQP<La>;
type ASolver = Solver<La>;

//

/// checks the KKT conditions of a computed solution
fn check_kkt(
    sym_g: &AMatBuild, vec_g0: &AMatBuild,
    mat_ce: &AMatBuild, vec_ce0: &AMatBuild,
    mat_ci: &AMatBuild, vec_ci0: &AMatBuild,
    x: &[f64], lagr: &[f64], tol: f64)
{
    let (n, _) = sym_g.size();
    let (_, m) = mat_ce.size();
    let (_, p) = mat_ci.size();
    assert_eq!(x.len(), n);
    assert_eq!(lagr.len(), m + p);

    // stationarity: G x + g_0 - C_E u_E - C_I u_I = 0
    let mut resid = vec_g0.as_ref().to_vec();
    sym_g.as_op().op(1., x, 1., &mut resid);
    mat_ce.as_op().op(-1., &lagr[.. m], 1., &mut resid);
    mat_ci.as_op().op(-1., &lagr[m ..], 1., &mut resid);
    for v in resid.iter() {
        assert_float_eq!(*v, 0., abs <= tol);
    }

    // primal feasibility: C_E^T x + c_e0 = 0
    let mut slack = vec_ce0.as_ref().to_vec();
    mat_ce.as_op().trans_op(1., x, 1., &mut slack);
    for v in slack.iter() {
        assert_float_eq!(*v, 0., abs <= tol);
    }

    // primal feasibility: C_I^T x + c_i0 >= 0
    let mut slack = vec_ci0.as_ref().to_vec();
    mat_ci.as_op().trans_op(1., x, 1., &mut slack);
    for v in slack.iter() {
        assert!(*v >= -tol);
    }

    // dual feasibility and complementary slackness
    for (v, u) in slack.iter().zip(&lagr[m ..]) {
        assert!(*u >= -tol);
        assert_float_eq!(*v * *u, 0., abs <= tol);
    }
}

//

#[test]
fn test_qp1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 1;
    let p = 3;

    // 2*x0^2 + 2*x1^2 - 2*x0*x1 + 6*x0
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 4.;
    sym_g[(0, 1)] = -2.;
    sym_g[(1, 1)] = 4.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 6.;

    // x0 + x1 = 3
    let mat_ce = AMatBuild::new(MatType::General(n, m)).iter_colmaj(&[
        1., 1.,
    ]);
    let vec_ce0 = AMatBuild::new(MatType::General(m, 1)).iter_colmaj(&[
        -3.,
    ]);

    // x0 >= 0, x1 >= 0, x0 + x1 >= 2
    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        1., 0.,
        0., 1.,
        1., 1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        0., 0., -2.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [1., 2.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [6., 0., 0., 0.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, 12., abs <= 1e-9);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-9);
}

//

#[test]
fn test_qp2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 0;
    let p = 1;

    // (1/2)(x0^2 + x1^2) + x0
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 1.;
    sym_g[(1, 1)] = 1.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 1.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    // x0 + 2*x1 >= 1
    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        1., 2.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        -1.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [-0.6, 0.8].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [0.4].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, -0.1, abs <= 1e-9);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-9);
}

//

#[test]
fn test_qp3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 0;
    let p = 0;

    // unconstrained, minimum at G^{-1} * (-g_0) = (-2, -1)
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 4.;
    sym_g[(0, 1)] = -2.;
    sym_g[(1, 1)] = 4.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 6.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p));

    let vec_ci0 = AMatBuild::new(MatType::General(p, 1));

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [-2., -1.].as_ref(), abs_all <= 1e-9);
    assert_eq!(rslt.1.len(), 0);
    assert_float_eq!(rslt.2, -6., abs <= 1e-9);
}

//

#[test]
fn test_qp4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 1;
    let p = 0;

    // 2*x0^2 + 2*x1^2 - 2*x0*x1 + 6*x0 on x0 + x1 = 3
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 4.;
    sym_g[(0, 1)] = -2.;
    sym_g[(1, 1)] = 4.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 6.;

    let mat_ce = AMatBuild::new(MatType::General(n, m)).iter_colmaj(&[
        1., 1.,
    ]);
    let vec_ce0 = AMatBuild::new(MatType::General(m, 1)).iter_colmaj(&[
        -3.,
    ]);

    let mat_ci = AMatBuild::new(MatType::General(n, p));

    let vec_ci0 = AMatBuild::new(MatType::General(p, 1));

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [1., 2.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [6.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, 12., abs <= 1e-9);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-9);
}

//

#[test]
fn test_qp5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let m = 0;
    let p = 3;

    // (1/2)(x0^2 + x1^2 + x2^2) - 5*x1
    let sym_g = AMatBuild::new(MatType::SymPack(n))
                .by_fn(|r, c| if r == c {1.} else {0.});

    let vec_g0 = AMatBuild::new(MatType::General(n, 1)).iter_colmaj(&[
        0., -5., 0.,
    ]);

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        -4., -3.,  0., // 4*x0 + 3*x1 <= 8
         2.,  1.,  0., // 2*x0 + x1 >= 2
         0., -2.,  1., // x2 >= 2*x1
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        8., -2., 0.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [0.476190476190476, 1.04761904761905, 2.0952380952381].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.1, [0., 0.238095238095238, 2.0952380952381].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.2, -2.38095238095238, abs <= 1e-6);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-6);
}

//

#[test]
fn test_qp6()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let m = 1;
    let p = 0;

    let sym_g = AMatBuild::new(MatType::SymPack(n)).iter_rowmaj(&[
        13., 18., -6.,
        18., 27., -9.,
        -6., -9.,  4.,
    ]);

    let vec_g0 = AMatBuild::new(MatType::General(n, 1)).iter_colmaj(&[
        4., 0., 100.,
    ]);

    // x2 = 25
    let mat_ce = AMatBuild::new(MatType::General(n, m)).iter_colmaj(&[
        0., 0., 1.,
    ]);
    let vec_ce0 = AMatBuild::new(MatType::General(m, 1)).iter_colmaj(&[
        -25.,
    ]);

    let mat_ci = AMatBuild::new(MatType::General(n, p));

    let vec_ci0 = AMatBuild::new(MatType::General(p, 1));

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [-4., 11., 25.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.1, [125.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.2, 2804.5, abs <= 1e-6);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-6);
}

//

#[test]
fn test_qp7()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 6;
    let m = 3;
    let p = 9;

    // x^T x + (10, 10, 30, 20, 30, 20)^T x
    let sym_g = AMatBuild::new(MatType::SymPack(n))
                .by_fn(|r, c| if r == c {2.} else {0.});

    let vec_g0 = AMatBuild::new(MatType::General(n, 1)).iter_colmaj(&[
        10., 10., 30., 20., 30., 20.,
    ]);

    let mat_ce = AMatBuild::new(MatType::General(n, m)).iter_colmaj(&[
        1., 0., 0., 0., 0., 0., // x0 = 4
        0., 1., 1., 1., 0., 0., // x1 + x2 + x3 = 5
        0., 0., 0., 0., 1., 1., // x4 + x5 = 1
    ]);
    let vec_ce0 = AMatBuild::new(MatType::General(m, 1)).iter_colmaj(&[
        -4., -5., -1.,
    ]);

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        -1., -1.,  0.,  0.,  0.,  0., // x0 + x1 <= 7.001
         0.,  0., -1.,  0., -1.,  0., // x2 + x4 <= 1.001
         0.,  0.,  0., -1.,  0., -1., // x3 + x5 <= 2.001
         1.,  0.,  0.,  0.,  0.,  0., // x0 >= 0
         0.,  1.,  0.,  0.,  0.,  0.,
         0.,  0.,  1.,  0.,  0.,  0.,
         0.,  0.,  0.,  1.,  0.,  0.,
         0.,  0.,  0.,  0.,  1.,  0.,
         0.,  0.,  0.,  0.,  0.,  1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        7.001, 1.001, 2.001, 0., 0., 0., 0., 0., 0.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [4., 3.001, 0.74875, 1.25025, 0.24925, 0.75075].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.1, [33.4955, 31.4975, 30.4985, 15.4955, 0., 8.997, 0., 0., 0., 0., 0., 0.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.2, 167.72550375, abs <= 1e-6);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-6);
}

//

#[test]
fn test_qp8()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 5;
    let m = 0;
    let p = 10;

    // (1/2) x^T x + (5, 0.5, 0, -0.2, -2)^T x in the box [-1, 1]^5
    let sym_g = AMatBuild::new(MatType::SymPack(n))
                .by_fn(|r, c| if r == c {1.} else {0.});

    let vec_g0 = AMatBuild::new(MatType::General(n, 1)).iter_colmaj(&[
        5., 0.5, 0., -0.2, -2.,
    ]);

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
         1.,  0.,  0.,  0.,  0., // x0 >= -1
         0.,  1.,  0.,  0.,  0.,
         0.,  0.,  1.,  0.,  0.,
         0.,  0.,  0.,  1.,  0.,
         0.,  0.,  0.,  0.,  1.,
        -1.,  0.,  0.,  0.,  0., // x0 <= 1
         0., -1.,  0.,  0.,  0.,
         0.,  0., -1.,  0.,  0.,
         0.,  0.,  0., -1.,  0.,
         0.,  0.,  0.,  0., -1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1))
                  .by_fn(|_, _| 1.);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [-1., -0.5, 0., 0.2, 1.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.1, [4., 0., 0., 0., 0., 0., 0., 0., 0., 1.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.2, -6.145, abs <= 1e-6);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-6);
}

//

#[test]
fn test_qp9()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 6;
    let m = 0;
    let p = 15;

    // test_qp7 with every equality relaxed into a pair of inequalities
    let sym_g = AMatBuild::new(MatType::SymPack(n))
                .by_fn(|r, c| if r == c {2.} else {0.});

    let vec_g0 = AMatBuild::new(MatType::General(n, 1)).iter_colmaj(&[
        10., 10., 30., 20., 30., 20.,
    ]);

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
         1.,  0.,  0.,  0.,  0.,  0., // x0 >= 3.999
        -1.,  0.,  0.,  0.,  0.,  0., // x0 <= 4.001
         0.,  1.,  1.,  1.,  0.,  0., // x1 + x2 + x3 >= 4.999
         0., -1., -1., -1.,  0.,  0., // x1 + x2 + x3 <= 5.001
         0.,  0.,  0.,  0.,  1.,  1., // x4 + x5 >= 0.999
         0.,  0.,  0.,  0., -1., -1., // x4 + x5 <= 1.001
        -1., -1.,  0.,  0.,  0.,  0., // x0 + x1 <= 7.001
         0.,  0., -1.,  0., -1.,  0., // x2 + x4 <= 1.001
         0.,  0.,  0., -1.,  0., -1., // x3 + x5 <= 2.001
         1.,  0.,  0.,  0.,  0.,  0., // x0 >= -0.001
         0.,  1.,  0.,  0.,  0.,  0.,
         0.,  0.,  1.,  0.,  0.,  0.,
         0.,  0.,  0.,  1.,  0.,  0.,
         0.,  0.,  0.,  0.,  1.,  0.,
         0.,  0.,  0.,  0.,  0.,  1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        -3.999, 4.001, -4.999, 5.001, -0.999, 1.001, 7.001, 1.001, 2.001,
        0.001, 0.001, 0.001, 0.001, 0.001, 0.001,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [3.999, 3.002, 0.747, 1.25, 0.248, 0.751].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.1, [33.488, 0., 31.494, 0., 30.496, 0., 15.49, 0., 8.994, 0., 0., 0., 0., 0., 0.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.2, 167.630019, abs <= 1e-6);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-6);
}

//

#[test]
fn test_qp10()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 0;
    let p = 0;

    // indefinite objective matrix
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 1.;
    sym_g[(0, 1)] = 2.;
    sym_g[(1, 1)] = 1.;

    let vec_g0 = AMatBuild::new(MatType::General(n, 1));

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p));

    let vec_ci0 = AMatBuild::new(MatType::General(p, 1));

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, SolverError::NotPositiveDefinite);
}

//

#[test]
fn test_qp11()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 1;
    let m = 2;
    let p = 0;

    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 1.;

    let vec_g0 = AMatBuild::new(MatType::General(n, 1));

    // x0 = 0 and x0 = 1 cannot hold together
    let mat_ce = AMatBuild::new(MatType::General(n, m)).iter_colmaj(&[
        1., 1.,
    ]);
    let vec_ce0 = AMatBuild::new(MatType::General(m, 1)).iter_colmaj(&[
        0., -1.,
    ]);

    let mat_ci = AMatBuild::new(MatType::General(n, p));

    let vec_ci0 = AMatBuild::new(MatType::General(p, 1));

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, SolverError::Infeasible);
}

//

#[test]
fn test_qp12()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 2;
    let p = 0;

    let sym_g = AMatBuild::new(MatType::SymPack(n))
                .by_fn(|r, c| if r == c {1.} else {0.});

    let vec_g0 = AMatBuild::new(MatType::General(n, 1));

    // x0 = 1 stated twice
    let mat_ce = AMatBuild::new(MatType::General(n, m)).iter_colmaj(&[
        1., 0.,
        1., 0.,
    ]);
    let vec_ce0 = AMatBuild::new(MatType::General(m, 1)).iter_colmaj(&[
        -1., -1.,
    ]);

    let mat_ci = AMatBuild::new(MatType::General(n, p));

    let vec_ci0 = AMatBuild::new(MatType::General(p, 1));

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, SolverError::RankDeficient);
}

//

#[test]
fn test_qp13()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 0;

    // 2*x0^2 + 2*x1^2 - 2*x0*x1 + 6*x0, minimum at (0.5, 1.5) on x0 + x1 >= 2
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 4.;
    sym_g[(0, 1)] = -2.;
    sym_g[(1, 1)] = 4.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 6.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, 3)).iter_colmaj(&[
        1., 0.,
        0., 1.,
        1., 1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(3, 1)).iter_colmaj(&[
        0., 0., -2.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [0.5, 1.5].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [0., 0., 5.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, 6.5, abs <= 1e-9);

    // restating x0 + x1 >= 2 and adding a slack bound shall not move the solution
    let mat_ci = AMatBuild::new(MatType::General(n, 5)).iter_colmaj(&[
        1., 0.,
        0., 1.,
        1., 1.,
        1., 1.,
        1., 0.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(5, 1)).iter_colmaj(&[
        0., 0., -2., -2., 5.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [0.5, 1.5].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [0., 0., 5., 0., 0.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, 6.5, abs <= 1e-9);
}

//

#[test]
fn test_qp14()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 0;
    let p = 3;

    // test_qp13 with its inequality columns cyclically permuted
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 4.;
    sym_g[(0, 1)] = -2.;
    sym_g[(1, 1)] = 4.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 6.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        1., 1.,
        1., 0.,
        0., 1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        -2., 0., 0.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    // the multiplier follows its constraint to the new position
    assert_float_eq!(rslt.0, [0.5, 1.5].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [5., 0., 0.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, 6.5, abs <= 1e-9);
}

//

#[test]
fn test_qp15()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 1;
    let m = 0;
    let p = 2;

    // x0^2 - 4*x0
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 2.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = -4.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    // x0 >= 1 and x0 <= 0 cannot hold together
    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
         1.,
        -1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        -1., 0.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, SolverError::Infeasible);
}

//

#[test]
fn test_qp16()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let m = 0;
    let p = 3;

    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 4.;
    sym_g[(0, 1)] = -2.;
    sym_g[(1, 1)] = 4.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = 6.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        1., 0.,
        0., 1.,
        1., 1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        0., 0., -2.,
    ]);

    let s = ASolver::new().par(|p| {p.max_iter = Some(0)});
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let rslt = s.solve(qp.problem()).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, SolverError::NumericalDegeneracy);
}

//

#[test]
fn test_qp17()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 1;
    let m = 0;
    let p = 1;

    // x0^2 - 4*x0 with the bound x0 >= 3
    let mut sym_g = AMatBuild::new(MatType::SymPack(n));
    sym_g[(0, 0)] = 2.;

    let mut vec_g0 = AMatBuild::new(MatType::General(n, 1));
    vec_g0[(0, 0)] = -4.;

    let mat_ce = AMatBuild::new(MatType::General(n, m));

    let vec_ce0 = AMatBuild::new(MatType::General(m, 1));

    let mat_ci = AMatBuild::new(MatType::General(n, p)).iter_colmaj(&[
        1.,
    ]);
    let vec_ci0 = AMatBuild::new(MatType::General(p, 1)).iter_colmaj(&[
        -3.,
    ]);

    let s = ASolver::new();
    let mut qp = AProbQP::new(
        sym_g.clone(), vec_g0.clone(), mat_ce.clone(), vec_ce0.clone(), mat_ci.clone(), vec_ci0.clone());
    let rslt = s.solve(qp.problem()).unwrap();
    println!("{:?}", rslt);

    assert_float_eq!(rslt.0, [3.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.1, [2.].as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.2, -3., abs <= 1e-9);
    check_kkt(&sym_g, &vec_g0, &mat_ce, &vec_ce0, &mat_ci, &vec_ci0, rslt.0, rslt.1, 1e-9);
}
