use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use ducktype_check::check_assignable;
use ducktype_driver::{load_document, LoadedDocument};

#[derive(Parser)]
#[command(
    name = "ducktype",
    version = "0.1.0",
    about = "Structural shape compatibility checker",
    long_about = "Checks duck-typing compatibility: whether shapes compose\nwithout conflict and whether candidate records satisfy them."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the assignability checks declared in a shape document
    Check {
        /// Input shape document (JSON)
        input: PathBuf,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Resolve a shape document and show the declared shapes (debug)
    Show {
        /// Input shape document (JSON)
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, verbose } => check_command(input, verbose),
        Commands::Show { input } => show_command(input),
    }
}

fn check_command(input: PathBuf, verbose: bool) -> ExitCode {
    if verbose {
        println!("Checking: {}", input.display());
    }

    let loaded = match load_input(&input) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    if verbose {
        let env = loaded.checker.env();
        println!(
            "  Declared {} enums, {} shapes, {} checks",
            env.enums_sorted().len(),
            env.shapes_sorted().len(),
            loaded.checks.len()
        );
    }

    let mut failures = 0;
    for (i, check) in loaded.checks.iter().enumerate() {
        // Targets are validated at load time
        let Some(target) = loaded.checker.lookup_shape(&check.target) else {
            continue;
        };

        match check_assignable(&check.record, target) {
            Ok(()) => {
                println!("check #{}: value is assignable to {}", i + 1, check.target);
            }
            Err(errors) => {
                failures += 1;
                println!(
                    "check #{}: value is NOT assignable to {}",
                    i + 1,
                    check.target
                );
                for error in &errors {
                    report_error("E2001", "Assignability error", &error.to_string());
                }
            }
        }
    }

    if failures == 0 {
        println!("All {} checks passed!", loaded.checks.len());
        ExitCode::SUCCESS
    } else {
        println!("{} of {} checks failed", failures, loaded.checks.len());
        ExitCode::FAILURE
    }
}

fn show_command(input: PathBuf) -> ExitCode {
    let loaded = match load_input(&input) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let env = loaded.checker.env();

    println!("Declarations in {}:\n", input.display());
    println!("{}", "=".repeat(80));

    for (name, members) in env.enums_sorted() {
        println!("enum {} {{ {} }}", name, members.join(", "));
    }
    for shape in env.shapes_sorted() {
        println!("{}", shape);
    }

    println!("{}", "=".repeat(80));
    println!(
        "\nTotal: {} enums, {} shapes",
        env.enums_sorted().len(),
        env.shapes_sorted().len()
    );

    ExitCode::SUCCESS
}

// Helper functions

fn load_input(input: &PathBuf) -> Result<LoadedDocument, ExitCode> {
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    match load_document(&source) {
        Ok(loaded) => Ok(loaded),
        Err(err) => {
            let title = match err.code() {
                "E2000" => "Declaration error",
                _ => "Document error",
            };
            report_error(err.code(), title, &err.to_string());
            Err(ExitCode::FAILURE)
        }
    }
}

fn report_error(code: &str, title: &str, message: &str) {
    eprintln!("error[{}]: {}: {}", code, title, message);
}
