//! Tests for sharing operands and reducers between threads
//!
//! Operands are immutable and reference-counted, so they can be sent to other
//! threads freely. A reducer's memo table is behind a lock and may be shared by
//! cloning the reducer.

use sop_logic::{operand, Operand, Reducer};
use std::thread;

fn formulas() -> Vec<Operand> {
    vec![
        operand!(("a" + "b") * ("a" + "c")),
        operand!(!("a" * ("b" + !"c"))),
        operand!("a" * "b" + "a" * !"b" + !"c"),
        operand!(("x" + "y") * (!"x" + "z") * ("y" + "z")),
        operand!("a" * !"b" + !"a" * "b"),
    ]
}

#[test]
fn test_operands_cross_threads() {
    let expr = operand!(("a" + "b") * ("a" + "c"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = expr.clone();
            thread::spawn(move || expr.reduce().expect("Reduction failed"))
        })
        .collect();

    for handle in handles {
        let reduced = handle.join().expect("Thread panicked");
        assert_eq!(reduced.to_string(), "(a) || (b && c)");
    }
}

#[test]
fn test_shared_reducer_consistent_results() {
    let reducer = Reducer::new();
    let formulas = formulas();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let reducer = reducer.clone();
            let formulas = formulas.clone();
            thread::spawn(move || {
                // Stagger the starting formula so threads race on different entries
                let mut reduced = Vec::with_capacity(formulas.len());
                for offset in 0..formulas.len() {
                    let index = (i + offset) % formulas.len();
                    reduced.push((index, reducer.reduce(&formulas[index]).unwrap()));
                }
                reduced.sort_by_key(|(index, _)| *index);
                reduced
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    let uncached: Vec<Operand> = formulas
        .iter()
        .map(|formula| {
            Reducer::with_config(sop_logic::ReduceConfig {
                memoize: false,
                ..Default::default()
            })
            .reduce(formula)
            .unwrap()
        })
        .collect();

    for result in &results {
        for (index, reduced) in result {
            assert_eq!(reduced, &uncached[*index]);
            assert!(reducer.is_reduced(reduced));
        }
    }
}

#[test]
fn test_global_memo_from_many_threads() {
    let handles: Vec<_> = formulas()
        .into_iter()
        .map(|formula| {
            thread::spawn(move || {
                let reduced = formula.reduce().unwrap();
                assert!(reduced.equivalent_to(&formula));
                reduced
            })
        })
        .collect();

    for handle in handles {
        let reduced = handle.join().expect("Thread panicked");
        assert_eq!(reduced.reduce().unwrap(), reduced);
    }
}

#[test]
fn test_clear_while_shared() {
    let reducer = Reducer::new();
    let writer = reducer.clone();

    let handle = thread::spawn(move || {
        for formula in formulas() {
            writer.reduce(&formula).unwrap();
        }
    });
    handle.join().expect("Thread panicked");

    assert!(reducer.memo_len() > 0);
    reducer.clear();
    assert_eq!(reducer.memo_len(), 0);

    // The table still works after clearing
    let reduced = reducer.reduce(&formulas()[0]).unwrap();
    assert!(reducer.is_reduced(&reduced));
}
