// 2D data files and the lattice rules behind them

use std::fmt::Write as _;
use std::io::Cursor;

use integrate::quadrature::tabulated::integrate_tabulated_2d;
use integrate::utils::gnuplot::{extract_2d, read_gnuplot_data};
use integrate::{GaussLegendre2D, IntegrateError, Method, SimpsonRule2D, TrapezoidRule2D};

/// gnuplot `splot` style data: one block per x value, blocks separated by a blank line
fn surface(f: impl Fn(f64, f64) -> f64, nx: i32, ny: i32, dx: f64, dy: f64) -> String {
    let mut text = String::new();
    for i in 0..=nx {
        let x = f64::from(i) * dx;
        for j in 0..=ny {
            let y = f64::from(j) * dy;
            writeln!(text, "{x} {y} {}", f(x, y)).unwrap();
        }
        text.push('\n');
    }
    text
}

#[test]
fn bilinear_surface_is_exact_with_the_trapezoid_rule() {
    let text = surface(|x, y| 1.0 + 2.0 * x + 3.0 * y + x * y, 4, 6, 0.5, 0.5);
    let data = read_gnuplot_data(Cursor::new(text)).unwrap();
    let (x, y, z) = extract_2d(&data);
    assert_eq!((x.len(), y.len()), (5, 7));

    // over [0, 2] x [0, 3]
    let exact = 6.0 + 2.0 * 2.0 * 3.0 + 3.0 * 4.5 * 2.0 + 2.0 * 4.5;
    let sum = integrate_tabulated_2d(Method::Trapezoid, &x, &y, &z).unwrap();
    assert!((sum - exact).abs() < 1e-10);

    let simpson = integrate_tabulated_2d(Method::Simpson, &x, &y, &z).unwrap();
    assert!((simpson - exact).abs() < 1e-10);
}

#[test]
fn shuffled_points_give_the_same_grid() {
    let ordered = "0 0 1\n0 1 2\n1 0 3\n1 1 4\n";
    let shuffled = "1 1 4\n0 1 2\n\n1 0 3\n0 0 1\n";

    let a = extract_2d(&read_gnuplot_data(Cursor::new(ordered)).unwrap());
    let b = extract_2d(&read_gnuplot_data(Cursor::new(shuffled)).unwrap());
    assert_eq!(a, b);

    let (x, y, z) = a;
    let sum = integrate_tabulated_2d(Method::Trapezoid, &x, &y, &z).unwrap();
    assert!((sum - 2.5).abs() < 1e-12);
}

#[test]
fn tabulated_and_callable_rules_agree() {
    let f = |x: f64, y: f64| (x * y).cos();
    let text = surface(f, 20, 10, 0.1, 0.1);
    let (x, y, z) = extract_2d(&read_gnuplot_data(Cursor::new(text)).unwrap());

    let tabulated = integrate_tabulated_2d(Method::Simpson, &x, &y, &z).unwrap();
    let callable = SimpsonRule2D::default().integrate(f, 0.0, 2.0, 20, 0.0, 1.0, 10).unwrap();
    let reference = GaussLegendre2D::new(32).unwrap().integrate(f, 0.0, 2.0, 0.0, 1.0);

    assert!((tabulated - callable).abs() < 1e-10);
    assert!((tabulated - reference).abs() < 1e-5);
}

#[test]
fn trapezoid_2d_converges_with_resolution() {
    let f = |x: f64, y: f64| x.sin() * y.sin();
    let rule = TrapezoidRule2D::default();
    let pi = std::f64::consts::PI;

    let coarse = rule.integrate(f, 0.0, pi, 10, 0.0, pi, 10).unwrap();
    let fine = rule.integrate(f, 0.0, pi, 20, 0.0, pi, 20).unwrap();
    assert!((fine - 4.0).abs() < (coarse - 4.0).abs());
    assert!((fine - 4.0).abs() < 2e-2);
}

#[test]
fn gauss_legendre_is_refused_for_tabulated_2d() {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    let z = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
    let err = integrate_tabulated_2d(Method::GaussLegendre, &x, &y, &z).unwrap_err();
    assert!(matches!(err, IntegrateError::UnsupportedMethod { dimensions: 2, .. }));
    assert_eq!(err.exit_code(), 2);
}
