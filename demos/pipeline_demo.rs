//! Walk through the reduction pipeline on a small instance
//!
//! Builds the formula for a three element universe, prints the DIMACS text
//! the solver would receive, and decodes a canned solver reply. No external
//! solver binary is needed.

use anyhow::{Context, Result};
use exact_cover_sat::cover::{decode_model, parse_problem, validate_selection};
use exact_cover_sat::sat::{parse_verdict, to_dimacs, CnfEncoder};

fn main() -> Result<()> {
    // Universe {1, 2, 3}; the only cover is {1,2} together with {3}
    let problem = parse_problem("1 2 3\n1 2\n3\n1\n2 3\n");

    let mut encoder = CnfEncoder::new();
    let formula = encoder.encode(&problem);

    println!("DIMACS formula handed to the solver:");
    print!("{}", to_dimacs(&formula));

    // What a glucose run on that formula prints back
    let solver_output = "c some preprocessing chatter\ns SATISFIABLE\nv 1 -2 -3 4 0\n";
    let verdict = parse_verdict(solver_output)?;
    println!("\nSolver says satisfiable: {}", verdict.satisfiable);

    let model = verdict
        .model
        .context("the canned output carries a model line")?;
    let selected = decode_model(&model, encoder.translator())?;
    println!("Selected subset indices: {:?}", selected);

    let report = validate_selection(&problem, &selected);
    print!("{}", report);

    Ok(())
}
