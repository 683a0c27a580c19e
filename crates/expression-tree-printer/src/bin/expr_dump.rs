//! Print the structural dump of a JSON-encoded expression tree.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use expression_tree::{Expression, TreeError};
use expression_tree_printer::{first_text_difference, TreePrinter};

#[derive(Parser, Debug)]
#[command(name = "expr-dump", about = "Print an indented dump of an expression tree")]
struct Args {
    /// JSON tree to print; reads stdin when omitted
    input: Option<PathBuf>,

    /// Second JSON tree to compare against; exits with 1 when they differ
    #[arg(short, long)]
    compare: Option<PathBuf>,
}

fn load(path: Option<&Path>) -> Result<Expression, TreeError> {
    match path {
        Some(path) => {
            log::debug!("loading tree from {}", path.display());
            expression_tree::from_reader(BufReader::new(File::open(path)?))
        }
        None => expression_tree::from_reader(io::stdin().lock()),
    }
}

fn run(args: &Args) -> Result<bool, TreeError> {
    let left = load(args.input.as_deref())?;
    let mut printer = TreePrinter::new();
    let left_text = printer.print(&left);
    print!("{left_text}");

    let Some(other) = args.compare.as_deref() else {
        return Ok(true);
    };
    let right = load(Some(other))?;
    let right_text = printer.print(&right);
    println!();
    print!("{right_text}");

    match first_text_difference(&left_text, &right_text) {
        Some(diff) => {
            eprintln!("trees differ at {diff}");
            Ok(false)
        }
        None => {
            eprintln!("trees are equivalent");
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("expr-dump: {err}");
            ExitCode::from(2)
        }
    }
}
