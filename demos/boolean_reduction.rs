//! Example: Reducing boolean formulas to sum-of-products form
//!
//! Builds formulas with the constructors, the operators and the operand! macro
//! and shows each stage of the reduction pipeline.

use sop_logic::{operand, Dnf, Operand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Boolean Reduction Examples ===\n");

    let a = Operand::unresolved("a");
    let b = Operand::unresolved("b");
    let c = Operand::unresolved("c");

    // Example 1: Distribution followed by absorption
    println!("1. Distribution and Absorption:");
    let expr = Operand::product([
        Operand::sum([a.clone(), b.clone()]),
        Operand::sum([a.clone(), c.clone()]),
    ]);
    println!("   Input:   {}", expr);
    println!("   Reduced: {}", expr.reduce()?);
    println!();

    // Example 2: De Morgan
    println!("2. Pushing Inversions Inward:");
    let expr = !&(&a * &(&b + &!&c));
    println!("   Input:      {}", expr);
    println!("   Simplified: {}", expr.simplify());
    println!("   Reduced:    {}", expr.reduce()?);
    println!();

    // Example 3: Opposite products merge
    println!("3. Merging Opposite Products:");
    let expr = operand!(a * b + a * !b + !c);
    println!("   Input:   {}", expr);
    println!("   Reduced: {}", expr.reduce()?);
    println!();

    // Example 4: Tautologies and contradictions
    println!("4. Constants:");
    let tautology = operand!(a + !a);
    let contradiction = operand!(a * !a * b);
    println!("   {} -> {}", tautology, tautology.reduce()?);
    println!("   {} -> {}", contradiction, contradiction.reduce()?);
    println!();

    // Example 5: Cube view
    println!("5. Cubes of a Reduced Formula:");
    let expr = operand!((a + b) * (!a + c));
    let dnf = Dnf::try_from(&expr)?;
    println!("   Input:     {}", expr);
    println!("   Reduced:   {}", Operand::from(&dnf));
    println!("   Variables: {:?}", dnf.variables());
    for cube in dnf.iter() {
        println!("   Cube:      {:?}", cube);
    }
    println!();

    let reduced = expr.reduce()?;
    println!(
        "Equivalent to input: {}",
        if reduced.equivalent_to(&expr) { "yes" } else { "no" }
    );

    Ok(())
}
