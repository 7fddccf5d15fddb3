//! Main CLI application for the exact cover SAT solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use exact_cover_sat::config::{CliOverrides, Settings, Verbosity};
use exact_cover_sat::cover::{create_example_problems, load_problem_from_file, validate_selection};
use exact_cover_sat::sat::{estimate_encoding, write_dimacs_file, CnfEncoder};
use exact_cover_sat::utils::{ColorOutput, SolutionFormatter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exact_cover_sat")]
#[command(about = "Solve exact cover problems with an external SAT solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an exact cover problem
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Problem input file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// DIMACS CNF output file (overrides config)
        #[arg(short = 'o', long)]
        cnf: Option<PathBuf>,

        /// SAT solver executable (overrides config)
        #[arg(short, long)]
        solver: Option<PathBuf>,

        /// Solver verbosity level, 0 to 2 (overrides config)
        #[arg(short, long)]
        verb: Option<u8>,

        /// Mute all solver output
        #[arg(short, long)]
        quiet: bool,

        /// Write the found cover as JSON to this file
        #[arg(long)]
        solution: Option<PathBuf>,
    },

    /// Encode a problem to DIMACS CNF without solving it
    Encode {
        /// Problem input file
        #[arg(short, long)]
        input: PathBuf,

        /// DIMACS CNF output file
        #[arg(short = 'o', long, default_value = "dimacs_cnf.out")]
        cnf: PathBuf,
    },

    /// Report problem statistics and the expected encoding size
    Analyze {
        /// Problem input file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Create example configuration and problem files
    Setup {
        /// Directory to create the files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            input,
            cnf,
            solver,
            verb,
            quiet,
            solution,
        } => solve_command(config, input, cnf, solver, verb, quiet, solution),
        Commands::Encode { input, cnf } => encode_command(input, cnf),
        Commands::Analyze { input } => analyze_command(input),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Execute the solve command
fn solve_command(
    config_path: PathBuf,
    input: Option<PathBuf>,
    cnf: Option<PathBuf>,
    solver: Option<PathBuf>,
    verb: Option<u8>,
    quiet: bool,
    solution_file: Option<PathBuf>,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔄 Starting exact cover solver"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    let verbosity = match verb {
        Some(flag) => Some(Verbosity::from_flag(flag).context("Verbosity must be 0, 1 or 2")?),
        None => None,
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        problem_file: input,
        cnf_file: cnf,
        solution_file,
        solver,
        verbosity,
        quiet,
    };
    settings.merge_with_cli(&cli_overrides);

    // Validate configuration
    settings.validate().context("Invalid configuration")?;

    let problem = load_problem_from_file(&settings.input.problem_file)?;
    println!(
        "Problem: {} universe elements, {} subsets",
        problem.element_count(),
        problem.subset_count()
    );

    let uncovered = problem.uncovered_elements();
    if !uncovered.is_empty() {
        println!(
            "{}",
            ColorOutput::warning(&format!("No subset covers: {}", uncovered.join(", ")))
        );
    }

    println!("{}", estimate_encoding(&problem));
    println!(
        "{}",
        ColorOutput::info("🧮 Encoding to CNF and running the SAT solver...")
    );

    let solution = exact_cover_sat::solve_problem(&problem, &settings)?;

    println!();
    print!("{}", SolutionFormatter::format_results(solution.as_ref()));

    match solution {
        Some(solution) => {
            println!();
            print!("{}", validate_selection(&problem, &solution.selected));
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "✅ Solved in {:.3}s (CNF written to {})",
                    solution.solve_time.as_secs_f64(),
                    settings.output.cnf_file.display()
                ))
            );

            if let Some(ref path) = settings.output.solution_file {
                solution
                    .save_to_file(path)
                    .with_context(|| format!("Failed to save solution to {}", path.display()))?;
                println!("💾 Solution saved to {}", path.display());
            }
        }
        None => {
            println!("{}", ColorOutput::warning("❌ No exact cover found"));
        }
    }

    Ok(())
}

/// Execute the encode command
fn encode_command(input: PathBuf, cnf: PathBuf) -> Result<()> {
    let problem = load_problem_from_file(&input)?;

    let mut encoder = CnfEncoder::new();
    let formula = encoder.encode(&problem);
    write_dimacs_file(&formula, &cnf)?;

    println!(
        "Encoded {} variables and {} clauses",
        formula.variable_count(),
        formula.clause_count()
    );
    println!(
        "{}",
        ColorOutput::success(&format!("✅ DIMACS CNF written to {}", cnf.display()))
    );

    Ok(())
}

/// Execute the analyze command
fn analyze_command(input: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing problem..."));

    let problem = load_problem_from_file(&input)?;

    println!("{}", SolutionFormatter::format_problem_summary(&problem));
    println!("{}", estimate_encoding(&problem));

    let uncovered = problem.uncovered_elements();
    if uncovered.is_empty() {
        println!(
            "{}",
            ColorOutput::success("Every universe element is covered by at least one subset")
        );
    } else {
        println!(
            "{}",
            ColorOutput::error(&format!("Unsolvable: no subset covers {}", uncovered.join(", ")))
        );
    }

    Ok(())
}

/// Execute the setup command
fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let problems_dir = directory.join("problems");

    // Create directories
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;
    std::fs::create_dir_all(&problems_dir)
        .with_context(|| format!("Failed to create directory {}", problems_dir.display()))?;

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let settings = Settings::default();
        settings
            .to_file(&config_path)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example problem files
    create_example_problems(&problems_dir)
        .with_context(|| format!("Failed to create examples in {}", problems_dir.display()))?;
    println!("Created: example problems in {}", problems_dir.display());

    println!("{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Install a DIMACS-speaking SAT solver (glucose-syrup by default)");
    println!("2. Edit config/default.yaml to point at your problem and solver");
    println!("3. Run: cargo run -- solve --input problems/simple.in");

    Ok(())
}
