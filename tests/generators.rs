use lyre::env::Env;
use lyre::generators::{arange, linspace};
use lyre::index;
use lyre::rdom::RDom;
use proptest::prelude::*;
use rstest::rstest;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_linspace_end_to_end() {
    init();
    let r = RDom::new(0, 5, "r");
    let f = linspace(0.0f64, 10.0, &r, "linspace");
    assert_eq!(f.realize(5).unwrap(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn test_arange_end_to_end() {
    init();
    let f = arange(0.0f64, 10.0, 2.5, "arange");
    // half-open: 10.0 itself is excluded
    assert_eq!(f.realize(4).unwrap(), vec![0.0, 2.5, 5.0, 7.5]);
}

#[rstest]
#[case(0.0, 1.0, 2)]
#[case(0.0, 0.3, 7)]
#[case(-5.0, 5.0, 11)]
#[case(1.0, -1.0, 9)]
fn test_linspace_endpoints_are_exact(#[case] start: f64, #[case] stop: f64, #[case] n: usize) {
    let r = RDom::new(0, n as i64, "r");
    let got = linspace(start, stop, &r, "ls").realize(n).unwrap();
    // bit-exact at both ends, regardless of step rounding
    assert_eq!(got[0], start);
    assert_eq!(got[n - 1], stop);
}

#[test]
fn test_linspace_interior_is_affine() {
    let r = RDom::new(0, 7, "r");
    let got = linspace(0.0f64, 0.3, &r, "ls").realize(7).unwrap();
    for (i, &v) in got.iter().enumerate().take(6).skip(1) {
        assert_eq!(v, 0.0 + i as f64 * ((0.3 - 0.0) / 6.0));
    }
}

#[rstest]
#[case(0.0, 10.0, 2.5, 4)]
#[case(0.0, 10.0, 3.0, 4)]
#[case(1.0, 2.0, 0.3, 4)]
#[case(0.0, 1.0, 1.0, 1)]
fn test_arange_length(#[case] start: f64, #[case] stop: f64, #[case] step: f64, #[case] n: usize) {
    assert_eq!(((stop - start) / step).ceil() as usize, n);
    let got = arange(start, stop, step, "ar").realize(n).unwrap();
    assert_eq!(got.len(), n);
    for (i, &v) in got.iter().enumerate() {
        assert_eq!(v, start + i as f64 * step);
    }
}

#[test]
fn test_linspace_symbolic_extent() {
    // the domain size is a free variable until realization
    let n = index::Expr::Var("n".to_string());
    let r = RDom::new(0, n, "r");
    let f = linspace(0.0f64, 10.0, &r, "ls");

    let env = Env::new().with("n", 5);
    assert_eq!(
        f.realize_with(&[5], &env).unwrap(),
        vec![0.0, 2.5, 5.0, 7.5, 10.0]
    );

    let env = Env::new().with("n", 3);
    assert_eq!(f.realize_with(&[3], &env).unwrap(), vec![0.0, 5.0, 10.0]);
}

proptest! {
    #[test]
    fn prop_linspace_hits_both_endpoints(
        start in -1e6f64..1e6,
        stop in -1e6f64..1e6,
        n in 2usize..50,
    ) {
        let r = RDom::new(0, n as i64, "r");
        let got = linspace(start, stop, &r, "ls").realize(n).unwrap();
        prop_assert_eq!(got[0], start);
        prop_assert_eq!(got[n - 1], stop);
        for (i, &v) in got.iter().enumerate().take(n - 1).skip(1) {
            prop_assert_eq!(v, start + i as f64 * ((stop - start) / (n as f64 - 1.0)));
        }
    }

    #[test]
    fn prop_arange_is_stepped_half_open(
        start in -100.0f64..100.0,
        span in 0.1f64..100.0,
        step in 0.1f64..10.0,
    ) {
        let stop = start + span;
        let n = ((stop - start) / step).ceil() as usize;
        let got = arange(start, stop, step, "ar").realize(n).unwrap();
        prop_assert_eq!(got.len(), n);
        for (i, &v) in got.iter().enumerate() {
            prop_assert_eq!(v, start + i as f64 * step);
        }
    }
}
