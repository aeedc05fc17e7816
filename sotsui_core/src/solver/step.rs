use num_traits::{Float, Zero};
use crate::LinAlgEx;

//

/// Primal and dual step lengths of one iteration.
pub(crate) struct StepLengths<F: Float>
{
    /// Dual bound and the position of the active constraint attaining it,
    /// whose multiplier hits zero first along the step.
    pub part: Option<(F, usize)>,
    /// Primal length reaching the candidate constraint boundary.
    pub full: Option<F>,
}

/// Ratio tests deciding how far the iterate may go along the step direction.
///
/// The dual bound scans the inequality part of the active set
/// for the minimum of `u[k] / r[k]` over positive `r[k]`,
/// keeping the first minimum so that ties break toward the lowest position.
/// The primal length is the candidate violation over the direction's rate of progress,
/// absent when the direction vanishes or the length comes out negative.
///
/// * `u` and `r` are the active multipliers and their change rates.
/// * `ztn` is the inner product of the step direction and the candidate normal.
/// * `slack` is the candidate constraint value at the iterate, negative when violated.
/// * `n_eq`..`n_act` is the positional range of active inequalities.
pub(crate) fn step_lengths<L: LinAlgEx>(u: &[L::F], r: &[L::F], ztn: L::F, slack: L::F, n_eq: usize, n_act: usize, eps_zero: L::F) -> StepLengths<L::F>
{
    let f0 = L::F::zero();

    let mut part = None;
    for k in n_eq.. n_act {
        if r[k] > eps_zero {
            let ratio = u[k] / r[k];
            let update = match part {
                None => true,
                Some((t1, _)) => ratio < t1,
            };
            if update {
                part = Some((ratio, k));
            }
        }
    }

    let full = if ztn > eps_zero {
        let t2 = -slack / ztn;
        if t2 < f0 {
            None
        }
        else {
            Some(t2)
        }
    }
    else {
        None
    };

    StepLengths {
        part, full,
    }
}

//

#[test]
fn test_step1()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    // ratio ties break toward the lowest position
    let u = [9., 2., 4., 0.];
    let r = [5., 2., 4., 0.];

    let s = step_lengths::<L>(&u, &r, 2., -3., 1, 3, 1e-12);
    assert_eq!(s.part, Some((1., 1)));
    assert_eq!(s.full, Some(1.5));
}

#[test]
fn test_step2()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let u = [1., 1.];
    let r = [0., -2.];

    // vanishing direction and nonpositive rates leave no step at all
    let s = step_lengths::<L>(&u, &r, 1e-15, -3., 0, 2, 1e-12);
    assert!(s.part.is_none());
    assert!(s.full.is_none());

    // a satisfied candidate yields no primal length
    let s = step_lengths::<L>(&u, &r, 2., 3., 0, 2, 1e-12);
    assert!(s.full.is_none());
}
