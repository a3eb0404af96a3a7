//! Integration tests for the LIR-CMOP problems.

use core::f64::consts::PI;

use cmop::prelude::*;

const TOL: f64 = 1e-12;

fn target(x0: f64) -> f64 {
    (0.5 * PI * x0).sin()
}

/// Variables that zero both auxiliary sums: every non-leading entry sits on
/// the sinusoidal target of `x0`.
fn on_target(n: usize, x0: f64) -> Vec<f64> {
    let mut x = vec![target(x0); n];
    x[0] = x0;
    x
}

#[test]
fn concrete_two_variable_scenario() {
    let problem = Lircmop1::new(2).unwrap();
    let mut solution = FloatSolution::with_variables(vec![0.5, target(0.5)], 2, 2);

    let evaluated = problem.evaluate(&mut solution).unwrap();

    assert!((evaluated.objectives()[0] - 0.5).abs() < TOL);
    assert!((evaluated.objectives()[1] - 0.75).abs() < TOL);
    assert!((evaluated.constraints()[0] + 0.255).abs() < TOL);
    assert!((evaluated.constraints()[1] + 0.255).abs() < TOL);
    assert!((evaluated.overall_constraint_violation_degree() + 0.51).abs() < TOL);
    assert_eq!(evaluated.number_of_violated_constraints(), 2);
}

#[test]
fn zero_auxiliary_terms_give_closed_form_objectives() {
    for n in [2, 5, 14, 30] {
        let problem = Lircmop1::new(n).unwrap();
        for x0 in [0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
            let mut solution = FloatSolution::with_variables(on_target(n, x0), 2, 2);
            problem.evaluate(&mut solution).unwrap();
            assert!((solution.objectives()[0] - x0).abs() < TOL, "n={n} x0={x0}");
            assert!(
                (solution.objectives()[1] - (1.0 - x0 * x0)).abs() < TOL,
                "n={n} x0={x0}"
            );
        }
    }
}

#[test]
fn lircmop2_second_objective_uses_square_root() {
    let problem = Lircmop2::new(6).unwrap();
    let x0 = 0.25;
    let mut solution = FloatSolution::with_variables(on_target(6, x0), 2, 2);
    problem.evaluate(&mut solution).unwrap();
    assert!((solution.objectives()[0] - 0.25).abs() < TOL);
    assert!((solution.objectives()[1] - 0.5).abs() < TOL);
    assert_eq!(problem.name(), "LIR-CMOP2");
}

#[test]
fn constraint_is_feasible_inside_band() {
    // n = 3: g1 = (x[2] - target)², so x[2] = target + sqrt(g) sets g1 = g.
    let problem = Lircmop1::new(3).unwrap();
    let x0 = 0.3;
    for (g, feasible) in [
        (0.50_f64, true),
        (0.505, true),
        (0.51, true),
        (0.49, false),
        (0.52, false),
        (0.0, false),
        (2.0, false),
    ] {
        let mut solution =
            FloatSolution::with_variables(vec![x0, 0.0, target(x0) + g.sqrt()], 2, 2);
        problem.evaluate(&mut solution).unwrap();
        let c = solution.constraints()[0];
        // Allow rounding at the band edges.
        if feasible {
            assert!(c >= -1e-15, "g={g} c={c}");
        } else {
            assert!(c < 0.0, "g={g} c={c}");
        }
    }
}

#[test]
fn violation_degree_is_sum_of_negative_constraints() {
    let problem = Lircmop1::new(20).unwrap();
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..100 {
        let mut solution = problem.create_solution(&mut rng);
        problem.evaluate(&mut solution).unwrap();

        let expected: f64 = solution.constraints().iter().filter(|&&c| c < 0.0).sum();
        assert_eq!(solution.overall_constraint_violation_degree(), expected);

        let all_satisfied = solution.constraints().iter().all(|&c| c >= 0.0);
        assert_eq!(solution.overall_constraint_violation_degree() == 0.0, all_satisfied);
        assert_eq!(is_feasible(&solution), all_satisfied);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let problem = Lircmop1::new(16).unwrap();
    let mut rng = fastrand::Rng::with_seed(11);
    let mut solution = problem.create_solution(&mut rng);

    problem.evaluate(&mut solution).unwrap();
    let first = solution.clone();

    // Tamper with the outputs; evaluation must overwrite, not accumulate.
    solution.objectives_mut().fill(123.0);
    solution.constraints_mut().fill(-7.0);
    problem.evaluate(&mut solution).unwrap();

    assert_eq!(solution, first);
}

#[test]
fn g2_contributes_from_fourteen_variables() {
    let x0 = 0.4;
    let mut x = on_target(14, x0);
    x[1] += 0.5;

    let problem = Lircmop1::new(14).unwrap();
    let mut solution = FloatSolution::with_variables(x.clone(), 2, 2);
    problem.evaluate(&mut solution).unwrap();
    assert!((solution.objectives()[1] - (1.0 - x0 * x0 + 0.25)).abs() < TOL);

    // Thirteen variables: same perturbation, empty g2 sum.
    x.pop();
    let problem = Lircmop1::new(13).unwrap();
    let mut solution = FloatSolution::with_variables(x, 2, 2);
    problem.evaluate(&mut solution).unwrap();
    assert!((solution.objectives()[1] - (1.0 - x0 * x0)).abs() < TOL);
}

#[test]
fn evaluate_returns_same_solution_for_chaining() {
    let problem = Lircmop1::default();
    let mut solution = FloatSolution::with_variables(vec![0.2, 0.8], 2, 2);
    let degree = problem
        .evaluate(&mut solution)
        .unwrap()
        .overall_constraint_violation_degree();
    assert_eq!(degree, solution.overall_constraint_violation_degree());
}

#[test]
fn dimension_mismatch_fails_fast() {
    let problem = Lircmop1::new(4).unwrap();

    let mut short = FloatSolution::with_variables(vec![0.1, 0.2], 2, 2);
    let err = problem.evaluate(&mut short).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            what: "variables",
            expected: 4,
            got: 2
        }
    ));
    // Nothing was written.
    assert_eq!(short.objectives(), &[0.0, 0.0]);

    let mut wrong_objectives = FloatSolution::new(4, 3, 2);
    assert!(matches!(
        problem.evaluate(&mut wrong_objectives),
        Err(Error::DimensionMismatch {
            what: "objectives",
            ..
        })
    ));

    let mut wrong_constraints = FloatSolution::new(4, 2, 0);
    assert!(matches!(
        problem.evaluate(&mut wrong_constraints),
        Err(Error::DimensionMismatch {
            what: "constraints",
            ..
        })
    ));
}

#[test]
fn out_of_bounds_variables_still_evaluate() {
    let problem = Lircmop1::new(3).unwrap();
    let mut solution = FloatSolution::with_variables(vec![2.0, -5.0, 7.0], 2, 2);
    problem.evaluate(&mut solution).unwrap();
    assert!(solution.objectives().iter().all(|v| v.is_finite()));
}

#[test]
fn metadata() {
    let problem = Lircmop1::new(30).unwrap();
    assert_eq!(problem.name(), "LIR-CMOP1");
    assert_eq!(problem.number_of_variables(), 30);
    assert_eq!(problem.number_of_objectives(), 2);
    assert_eq!(problem.number_of_constraints(), 2);
    assert_eq!(problem.directions(), &[Direction::Minimize, Direction::Minimize]);
    assert_eq!(problem.labels(), &["f(x)", "f(y)"]);
    assert_eq!(problem.bounds(), &Bounds::uniform(30, 0.0, 1.0).unwrap());
}

#[test]
fn custom_bounds_drive_factory() {
    let bounds = Bounds::new(vec![0.0, 0.4, 0.4], vec![0.1, 0.6, 0.6]).unwrap();
    let problem = Lircmop1::with_bounds(bounds.clone()).unwrap();
    assert_eq!(problem.number_of_variables(), 3);

    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..50 {
        let solution = problem.create_solution(&mut rng);
        assert!(bounds.contains(solution.variables()));
        assert_eq!(solution.number_of_objectives(), 2);
        assert_eq!(solution.number_of_constraints(), 2);
    }

    assert!(matches!(
        Lircmop1::with_bounds(Bounds::unit(0)),
        Err(Error::InvalidDimension { .. })
    ));
}

#[test]
fn seeded_factories_are_reproducible() {
    let problem = Lircmop1::new(10).unwrap();
    let a = problem.create_solution(&mut fastrand::Rng::with_seed(99));
    let b = problem.create_solution(&mut fastrand::Rng::with_seed(99));
    assert_eq!(a, b);
}

#[test]
fn problems_are_usable_as_trait_objects() {
    let problems: Vec<Box<dyn Problem>> = vec![
        Box::new(Lircmop1::new(4).unwrap()),
        Box::new(Lircmop2::new(4).unwrap()),
    ];
    let mut rng = fastrand::Rng::with_seed(1);
    for problem in &problems {
        let mut solution = problem.create_solution(&mut rng);
        problem.evaluate(&mut solution).unwrap();
        assert_eq!(solution.objectives().len(), 2);
    }
}
