//! Evaluate a random LIR-CMOP1 population and write the usual reports.
//!
//! Writes `VAR.LIR-CMOP1.txt` and `FUN.LIR-CMOP1.txt` into a `cmop-demo`
//! directory under the system temp dir, prints the non-dominated objectives
//! and, if a reference front is passed as the first argument, the inverted
//! generational distance against it.
//!
//! Run with: `cargo run --example lircmop1_report [reference-front-file]`

use cmop::prelude::*;

fn main() -> cmop::Result<()> {
    let problem = Lircmop1::new(30)?;
    let mut rng = fastrand::Rng::with_seed(2019);

    let mut population: Vec<FloatSolution> =
        (0..100).map(|_| problem.create_solution(&mut rng)).collect();
    for solution in &mut population {
        problem.evaluate(solution)?;
    }

    println!(
        "{}: {} solutions, feasibility ratio {:.2}",
        problem.name(),
        population.len(),
        feasibility_ratio(&population)?,
    );

    let front = non_dominated_solutions(&population, problem.directions());
    println!("Non-dominated solutions ({}):", front.len());
    print_objectives_to_console(&front)?;
    println!("First variable of each:");
    print_variables_to_console(&front)?;

    let out = std::env::temp_dir().join("cmop-demo");
    write_variables(&front, out.join(format!("VAR.{}.txt", problem.name())))?;
    write_objectives(&front, out.join(format!("FUN.{}.txt", problem.name())))?;
    println!("Reports written to {}", out.display());

    if let Some(path) = std::env::args().nth(1) {
        let reference = read_reference_front(&path)?;
        println!(
            "IGD against {} ({} points): {:.4}",
            path,
            reference.len(),
            inverted_generational_distance(&front, &reference),
        );
    }

    Ok(())
}
