//! Spot-check runner binary.
//!
//! Runs the canonical reference cases through the distorted-magnitude
//! contract and prints the report to stdout. Takes no flags, arguments, or
//! environment variables, and always exits with status 0; mismatches are
//! reported textually only.

use distmag::prelude::*;

fn main() {
    println!("{}", "=".repeat(68));
    println!("Distorted Magnitude - Spot Check");
    println!("{}", "=".repeat(68));
    println!();

    let report = run_examples();
    println!("{}", report);
}
