//! Example: Substituting values for variables

use sop_logic::{operand, Operand};
use std::collections::BTreeMap;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Substitution Examples ===\n");

    // Example 1: Assigning a constant
    println!("1. Assigning a Constant:");
    let test = operand!(!"test");
    let unrelated = test.substitute("t", &Operand::resolved(false));
    let assigned = test.substitute("test", &Operand::resolved(false));
    println!("   Input:            {}", test);
    println!("   t := 0:           {}", unrelated);
    println!("   test := 0:        {}", assigned);
    println!("   Simplified:       {}", assigned.simplify());
    println!();

    // Example 2: Substituting a sub-formula
    println!("2. Substituting a Formula:");
    let select = operand!("s" * "x" + !"s" * "y");
    let replacement = operand!("p" + "q");
    let composed = select.substitute("s", &replacement);
    println!("   Input:   {}", select);
    println!("   s := {}", replacement);
    println!("   Result:  {}", composed);
    println!("   Reduced: {}", composed.reduce()?);
    println!();

    // Example 3: Simultaneous substitution
    println!("3. Swapping Variables:");
    let expr = operand!("a" * !"b");
    let mut swap = BTreeMap::new();
    swap.insert(Arc::from("a"), Operand::unresolved("b"));
    swap.insert(Arc::from("b"), Operand::unresolved("a"));
    println!("   Input:   {}", expr);
    println!("   Swapped: {}", expr.substitute_all(&swap));
    println!();

    // Example 4: Partial evaluation
    println!("4. Partial Evaluation:");
    let majority = operand!("a" * "b" + "a" * "c" + "b" * "c");
    for value in [false, true] {
        let fixed = majority.substitute("a", &Operand::resolved(value));
        println!("   a := {}: {}", u8::from(value), fixed.reduce()?);
    }

    Ok(())
}
