// Adaptive refinement over the fixed rules

use std::f64::consts::PI;

use integrate::{AdaptiveQuadrature, GaussLegendre, SimpsonRule, TrapezoidRule};

#[test]
fn adaptive_simpson_reaches_tight_tolerances() {
    let adaptive = AdaptiveQuadrature::new(SimpsonRule::new()).with_tolerance(1e-8);
    let sum = adaptive.integrate(|x: f64| x.sin(), 0.0, PI).unwrap();
    assert!((sum - 2.0).abs() < 1e-6);
}

#[test]
fn tighter_tolerance_costs_more_rule_calls() {
    let f = |x: f64| x.exp();
    let exact = 2.0_f64.exp() - 1.0;

    let loose = AdaptiveQuadrature::new(TrapezoidRule::new())
        .with_tolerance(1e-2)
        .integrate_with_stats(f, 0.0, 2.0)
        .unwrap();
    let tight = AdaptiveQuadrature::new(TrapezoidRule::new())
        .with_tolerance(1e-6)
        .integrate_with_stats(f, 0.0, 2.0)
        .unwrap();

    assert!(tight.rule_calls > loose.rule_calls);
    assert!(tight.max_depth_reached >= loose.max_depth_reached);
    assert!((tight.value - exact).abs() < 1e-5 * exact);
    assert!((tight.value - exact).abs() < (loose.value - exact).abs());
}

#[test]
fn refinement_concentrates_where_the_function_is_rough() {
    let adaptive = AdaptiveQuadrature::new(SimpsonRule::new())
        .with_tolerance(1e-6)
        .with_intervals(4);
    let estimate = adaptive.integrate_with_stats(|x: f64| x.abs().sqrt(), -1.0, 1.0).unwrap();

    assert!((estimate.value - 4.0 / 3.0).abs() < 1e-4);
    assert!(estimate.max_depth_reached > 2);
    assert_eq!(adaptive.intervals(), 4);
}

#[test]
fn adaptive_gauss_legendre_stops_immediately_on_smooth_input() {
    let rule = GaussLegendre::new(16).unwrap();
    let estimate = AdaptiveQuadrature::new(rule)
        .integrate_with_stats(|x: f64| x.cos(), 0.0, 1.0)
        .unwrap();

    assert!((estimate.value - 1.0_f64.sin()).abs() < 1e-12);
    assert_eq!(estimate.max_depth_reached, 0);
}

#[test]
fn depth_limit_bounds_the_work() {
    let adaptive = AdaptiveQuadrature::new(TrapezoidRule::new())
        .with_tolerance(0.0)
        .with_abs_tolerance(0.0)
        .with_max_depth(2);
    let estimate = adaptive.integrate_with_stats(|x: f64| x.sin(), 0.0, 1.0).unwrap();

    assert_eq!(adaptive.max_depth(), 2);
    assert_eq!(estimate.max_depth_reached, 3);
    // one initial estimate, then two per visited node at depths 0 through 2
    assert_eq!(estimate.rule_calls, 1 + 2 * (1 + 2 + 4));
}

#[test]
fn infinite_limits_are_rejected() {
    let adaptive: AdaptiveQuadrature<SimpsonRule> = AdaptiveQuadrature::default();
    assert!(adaptive.integrate(|x: f64| (-x).exp(), 0.0, f64::INFINITY).is_err());
}
