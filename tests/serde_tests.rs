#![cfg(feature = "serde")]

use cmop::prelude::*;

#[test]
fn evaluated_solution_round_trips_through_json() {
    let problem = Lircmop1::new(5).unwrap();
    let mut solution = problem.create_solution(&mut fastrand::Rng::with_seed(8));
    problem.evaluate(&mut solution).unwrap();

    let json = serde_json::to_string(&solution).unwrap();
    let restored: FloatSolution = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, solution);
    assert_eq!(
        restored.overall_constraint_violation_degree(),
        solution.overall_constraint_violation_degree()
    );
}

#[test]
fn solution_json_field_names() {
    let solution = FloatSolution::with_variables(vec![0.5], 2, 1);
    let value: serde_json::Value = serde_json::to_value(&solution).unwrap();
    for key in [
        "variables",
        "objectives",
        "constraints",
        "overall_constraint_violation_degree",
        "number_of_violated_constraints",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn bounds_and_direction_serialize() {
    let bounds = Bounds::new(vec![0.0, -1.0], vec![1.0, 1.0]).unwrap();
    let json = serde_json::to_string(&bounds).unwrap();
    let restored: Bounds = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bounds);

    let json = serde_json::to_string(&Direction::Minimize).unwrap();
    assert_eq!(json, "\"Minimize\"");
}

#[test]
fn invalid_bounds_are_rejected_on_deserialize() {
    let json = r#"{"lower":[2.0],"upper":[1.0]}"#;
    assert!(serde_json::from_str::<Bounds>(json).is_err());
}

#[test]
fn feasible_degree_serializes_as_positive_zero() {
    let mut solution = FloatSolution::new(1, 2, 2);
    solution.constraints_mut().copy_from_slice(&[0.1, 0.2]);
    set_overall_constraint_violation_degree(&mut solution);

    let json = serde_json::to_string(&solution).unwrap();
    assert!(
        json.contains("\"overall_constraint_violation_degree\":0.0"),
        "{json}"
    );
}
