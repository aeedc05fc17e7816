use sotsui::prelude::*;
use sotsui::*;

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;
type AProbQP = ProbQP<La>;
type ASolver = Solver<La>;

/// main
fn main() -> std::io::Result<()> {
    env_logger::init();

    //----- formulate a QP with one equality and three inequalities

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
    //println!("{}", mat_ci);

    //----- solve QP

    let s = ASolver::new();
    let mut qp = AProbQP::new(sym_g, vec_g0, mat_ce, vec_ce0, mat_ci, vec_ci0);
    let (x, lagr, obj) = s.solve(qp.problem()).unwrap();

    println!("x {:?}", x);
    println!("lagr {:?}", lagr);
    println!("obj {:.3e}", obj);

    Ok(())
}
