// Gaussian rules: fixed order, 2D and adaptive Gauss-Kronrod

use std::f64::consts::PI;

use integrate::quadrature::gauss_legendre::SUPPORTED_ORDERS;
use integrate::{CubicSpline, GaussKronrod, GaussLegendre, GaussLegendre2D, IntegrateError, Quadrature};

#[test]
fn every_supported_order_is_exact_to_its_degree() {
    for order in SUPPORTED_ORDERS {
        let rule = GaussLegendre::new(order).unwrap();
        let degree = 2 * order - 1;
        let power = i32::try_from(degree).unwrap();
        let sum = rule.integrate(|x: f64| x.powi(power), 0.0, 1.0);
        let exact = 1.0 / f64::from(power + 1);
        assert!((sum - exact).abs() < 1e-12, "order {order}: {sum} vs {exact}");
    }
}

#[test]
fn composite_gauss_legendre_on_an_oscillating_function() {
    let rule = GaussLegendre::new(8).unwrap();
    let sum = Quadrature::integrate(&rule, |x: f64| (10.0 * x).cos(), 0.0, PI, 8).unwrap();
    assert!(sum.abs() < 1e-10);
}

#[test]
fn nonstandard_orders_are_computed() {
    let rule = GaussLegendre::new(5).unwrap();
    assert_eq!(rule.nodes().len(), 5);
    let sum = rule.integrate(|x: f64| x.powi(9), -1.0, 2.0);
    assert!((sum - (1024.0 - 1.0) / 10.0).abs() < 1e-10);

    assert!(matches!(GaussLegendre::new(0), Err(IntegrateError::UnsupportedOrder(0))));
}

#[test]
fn gauss_legendre_2d_on_a_polynomial_surface() {
    let rule = GaussLegendre2D::new(16).unwrap();
    let sum = rule.integrate(|x: f64, y: f64| x * x * y * y, 0.0, 1.0, 0.0, 1.0);
    assert!((sum - 1.0 / 9.0).abs() < 1e-12);
}

#[test]
fn gauss_kronrod_over_the_real_line() {
    let estimate = GaussKronrod::new().integrate(|x: f64| 1.0 / (1.0 + x * x), f64::NEG_INFINITY, f64::INFINITY).unwrap();
    assert!((estimate.value - PI).abs() < 1e-6);
    assert!(estimate.error >= 0.0);
}

#[test]
fn gauss_kronrod_refines_around_a_kink() {
    let rule = GaussKronrod::new().with_tolerance(1e-10);
    let estimate = rule.integrate(|x: f64| (x - 0.3).abs(), 0.0, 1.0).unwrap();
    assert!((estimate.value - 0.29).abs() < 1e-9);
    assert!(estimate.depth > 0);
    assert!(estimate.depth <= rule.max_depth());
}

#[test]
fn spline_through_a_cubic_integrates_close_to_exact() {
    let x: Vec<f64> = (0..=20_i32).map(|i| f64::from(i) * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|x| x * x * x).collect();
    let spline = CubicSpline::new(&x, &y).unwrap();

    let order = GaussLegendre::order_for_samples(x.len() - 1);
    let sum = GaussLegendre::new(order).unwrap().integrate(|t| spline.eval(t), 0.0, 2.0);
    assert!((sum - 4.0).abs() < 1e-2);
}
