//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads the function description from flags and prints the minimized
//! sum-of-products expression:
//!
//! ```text
//! qmc -l 4 --sop 0 1 2 5 6 7 8 9 10 14
//! f = b'c' + cd' + a'bd
//! ```

use clap::Parser;
use qmc_logic::{BoolFunction, FunctionError};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Number of literals (bit width of every term)
    #[arg(short = 'l', long = "literals-count")]
    literals_count: usize,

    /// SOP minterms (rows where the function is 1)
    #[arg(long = "sop", num_args = 1.., value_name = "TERM")]
    sop: Vec<u32>,

    /// POS maxterms (converted to their complementary minterm)
    #[arg(long = "pos", num_args = 1.., value_name = "TERM")]
    pos: Vec<u32>,

    /// Don't-care terms (never required to be covered)
    #[arg(long = "dont-care", num_args = 1.., value_name = "TERM")]
    dont_care: Vec<u32>,

    /// Append each term's covered minterms to the output
    #[arg(long = "debug")]
    debug: bool,
}

fn build_function(args: &Args) -> Result<BoolFunction, FunctionError> {
    let mut function = BoolFunction::new(args.literals_count)?;
    for &term in &args.sop {
        function.add_minterm(term)?;
    }
    for &term in &args.pos {
        function.add_maxterm(term)?;
    }
    for &term in &args.dont_care {
        function.add_dont_care(term)?;
    }
    Ok(function)
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let function = match build_function(&args) {
        Ok(function) => function,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let cover = function.minimize();

    if args.debug {
        println!("f = {}", cover.annotated_expression());
    } else {
        println!("f = {}", cover.expression());
    }
}
