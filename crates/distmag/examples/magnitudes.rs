//! Distorted Magnitude Examples
//!
//! This example demonstrates the library surface:
//! - Evaluation with the canonical scale
//! - A configured evaluator with a custom distortion scale
//! - Checked evaluation of untrusted inputs
//! - Running the built-in spot checks
//!
//! Each scenario includes the expected output as comments.

use distmag::prelude::*;

fn main() -> Result<(), MagnitudeError> {
    println!("{}", "=".repeat(68));
    println!("Distorted Magnitude - Examples");
    println!("{}", "=".repeat(68));
    println!();

    example_1_canonical_scale();
    example_2_custom_scale()?;
    example_3_checked_evaluation()?;
    example_4_spot_checks();

    Ok(())
}

/// Example 1: Canonical Scale
/// The free function with the default 10.0 distortion scale
fn example_1_canonical_scale() {
    println!("Example 1: Canonical Scale");
    println!("{}", "-".repeat(68));

    // Zero distortion reduces to the Euclidean magnitude
    println!("f(3, 4, 0)  = {:.5}", distorted_magnitude(3.0, 4.0, 0.0));

    // Distortion inflates the magnitude; sign of k is irrelevant
    println!("f(3, 4, 5)  = {:.5}", distorted_magnitude(3.0, 4.0, 5.0));
    println!("f(3, 4, -5) = {:.5}", distorted_magnitude(3.0, 4.0, -5.0));

    /* Expected Output:
    f(3, 4, 0)  = 5.00000
    f(3, 4, 5)  = 6.42013
    f(3, 4, -5) = 6.42013
    */

    println!();
}

/// Example 2: Custom Scale
/// A configured evaluator with a steeper distortion than the default
fn example_2_custom_scale() -> Result<(), MagnitudeError> {
    println!("Example 2: Custom Scale");
    println!("{}", "-".repeat(68));

    let default_model = Magnitude::new().build()?;
    let steep_model = Magnitude::new().scale(5.0).build()?;

    println!("scale=10: f(3, 4, 2) = {:.5}", default_model.eval(3.0, 4.0, 2.0));
    println!("scale=5:  f(3, 4, 2) = {:.5}", steep_model.eval(3.0, 4.0, 2.0));

    /* Expected Output:
    scale=10: f(3, 4, 2) = 5.52585
    scale=5:  f(3, 4, 2) = 6.10701
    */

    println!();
    Ok(())
}

/// Example 3: Checked Evaluation
/// try_eval rejects non-finite inputs with a typed error
fn example_3_checked_evaluation() -> Result<(), MagnitudeError> {
    println!("Example 3: Checked Evaluation");
    println!("{}", "-".repeat(68));

    let model = Magnitude::new().build()?;

    println!("finite:  {:?}", model.try_eval(3.0, 4.0, 1.0));
    println!("nan:     {:?}", model.try_eval(3.0, f64::NAN, 1.0));

    /* Expected Output:
    finite:  Ok(5.256355...)
    nan:     Err(NonFiniteInput { name: "b", value: NaN })
    */

    println!();
    Ok(())
}

/// Example 4: Spot Checks
/// The built-in reference cases with their pass/fail report
fn example_4_spot_checks() {
    println!("Example 4: Spot Checks");
    println!("{}", "-".repeat(68));

    let report = run_examples();
    println!("{}", report);
    println!(
        "passed: {}/{}, all passed: {}",
        report.passed_count(),
        report.len(),
        report.all_passed()
    );

    println!();
}
