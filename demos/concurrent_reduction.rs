//! Example: Sharing one reducer between threads

use sop_logic::{operand, Operand, Reducer};
use std::thread;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Concurrent Reduction ===\n");

    let reducer = Reducer::new();
    let formulas: Vec<Operand> = vec![
        operand!(("a" + "b") * ("a" + "c")),
        operand!(!("a" * ("b" + !"c"))),
        operand!("a" * "b" + "a" * !"b"),
        operand!(("x" + "y") * (!"x" + "z")),
    ];

    // Every thread reduces every formula through the same memo table
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let reducer = reducer.clone();
            let formulas = formulas.clone();
            thread::spawn(move || {
                let reduced = formulas
                    .iter()
                    .map(|formula| reducer.reduce(formula))
                    .collect::<Result<Vec<_>, _>>();
                println!("Thread {} completed", i);
                reduced
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        let reduced = handle.join().map_err(|_| "reduction thread panicked")??;
        results.push(reduced);
    }

    for (formula, reduced) in formulas.iter().zip(&results[0]) {
        println!("{} -> {}", formula, reduced);
    }

    let consistent = results.windows(2).all(|pair| pair[0] == pair[1]);
    println!("\nAll threads agree: {}", consistent);
    println!("Memo entries: {}", reducer.memo_len());

    Ok(())
}
