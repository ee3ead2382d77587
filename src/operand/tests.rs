//! Tests for the operand module

use super::*;
use crate::{ReduceConfig, Reducer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

fn lit(name: &str) -> Operand {
    Operand::unresolved(name)
}

fn not(operand: Operand) -> Operand {
    Operand::invert(operand)
}

/// A spread of operands covering every variant, nesting and constant placement
fn samples() -> Vec<Operand> {
    let a = lit("a");
    let b = lit("b");
    let c = lit("c");
    let zero = Operand::resolved(false);
    let one = Operand::resolved(true);

    vec![
        a.clone(),
        b.clone(),
        not(a.clone()),
        zero.clone(),
        one.clone(),
        not(zero.clone()),
        not(not(a.clone())),
        Operand::product([a.clone(), b.clone()]),
        Operand::product([b.clone(), a.clone(), c.clone()]),
        Operand::sum([a.clone(), b.clone()]),
        Operand::sum([a.clone(), not(a.clone())]),
        Operand::product([a.clone(), not(a.clone())]),
        Operand::product([
            Operand::sum([a.clone(), b.clone()]),
            Operand::sum([a.clone(), c.clone()]),
        ]),
        not(Operand::product([a.clone(), b.clone()])),
        not(Operand::sum([a.clone(), Operand::product([b.clone(), c.clone()])])),
        Operand::sum([
            Operand::product([a.clone(), b.clone()]),
            Operand::product([a.clone(), not(b.clone())]),
            not(c.clone()),
        ]),
        Operand::product([a.clone(), one, Operand::sum([b.clone(), zero])]),
        Operand::sum([
            not(not(b.clone())),
            Operand::product([c.clone(), Operand::sum([a.clone(), not(b.clone())])]),
        ]),
        Operand::product([
            Operand::sum([a.clone(), b.clone()]),
            Operand::sum([not(a), c.clone()]),
            Operand::sum([b, not(c)]),
        ]),
    ]
}

fn hash_of(operand: &Operand) -> u64 {
    let mut hasher = DefaultHasher::new();
    operand.hash(&mut hasher);
    hasher.finish()
}

// ========== Scenarios ==========

#[test]
fn test_inverted_identifier_scenario() {
    let test = not(lit("test"));
    assert_eq!(test.to_string(), "!(test)");

    let untouched = test.substitute("t", &Operand::resolved(false));
    assert_eq!(untouched, test);
    assert_eq!(untouched.to_string(), "!(test)");

    let assigned = test.substitute("test", &Operand::resolved(false));
    assert_eq!(assigned, not(Operand::resolved(false)));
    assert_eq!(assigned.simplify(), Operand::resolved(true));
    assert_eq!(assigned.simplify().to_string(), "1");
}

#[test]
fn test_distributive_scenario() {
    let a = lit("a");
    let b = lit("b");
    let c = lit("c");
    let expr = Operand::product([
        Operand::sum([a.clone(), b.clone()]),
        Operand::sum([a.clone(), c.clone()]),
    ]);

    let reduced = expr.reduce().unwrap();
    let expected = Operand::sum([Operand::product([a]), Operand::product([b, c])]);
    assert_eq!(reduced, expected);
    assert_eq!(reduced.to_string(), "(a) || (b && c)");
}

// ========== Display ==========

#[test]
fn test_display_nested_compounds_are_parenthesized() {
    let expr = Operand::product([lit("a"), Operand::sum([lit("b"), lit("c")])]);
    assert_eq!(expr.to_string(), "a && (b || c)");
}

#[test]
fn test_display_invert_of_compound() {
    let expr = not(Operand::product([lit("a"), lit("b")]));
    assert_eq!(expr.to_string(), "!(a && b)");
    assert_eq!(not(not(lit("a"))).to_string(), "!(!(a))");
}

#[test]
fn test_display_single_child_product_in_sum() {
    let expr = Operand::sum([Operand::product([lit("a")])]);
    assert_eq!(expr.to_string(), "(a)");
}

#[test]
fn test_debug_matches_display() {
    for operand in samples() {
        assert_eq!(format!("{:?}", operand), operand.to_string());
    }
}

// ========== Ordering, Equality and Hashing ==========

#[test]
fn test_ordering_is_strict_weak_order() {
    let samples = samples();
    for x in &samples {
        for y in &samples {
            let forward = x.cmp(y);
            assert_eq!(forward, y.cmp(x).reverse(), "{} vs {}", x, y);
            assert_eq!(forward == Ordering::Equal, x == y, "{} vs {}", x, y);

            for z in &samples {
                if x <= y && y <= z {
                    assert!(x <= z, "{} <= {} <= {}", x, y, z);
                }
            }
        }
    }
}

#[test]
fn test_equal_operands_hash_equally() {
    let originals = samples();
    let rebuilt = samples();
    for (x, y) in originals.iter().zip(&rebuilt) {
        assert!(!x.ptr_eq(y));
        assert_eq!(x, y);
        assert_eq!(hash_of(x), hash_of(y));
    }
}

// ========== Substitution ==========

#[test]
fn test_substitute_without_occurrence_is_identity() {
    for operand in samples() {
        let substituted = operand.substitute("zz", &Operand::resolved(true));
        assert_eq!(substituted, operand);
        assert!(substituted.ptr_eq(&operand));
    }
}

#[test]
fn test_substitute_does_not_simplify() {
    let expr = Operand::product([lit("a"), lit("b")]);
    let substituted = expr.substitute("a", &Operand::resolved(true));
    assert_eq!(substituted.to_string(), "b && 1");
    assert_eq!(substituted.simplify().to_string(), "b");
}

#[test]
fn test_substitute_collapses_duplicates() {
    let expr = Operand::sum([lit("a"), lit("b")]);
    let substituted = expr.substitute("a", &lit("b"));
    assert_eq!(substituted, Operand::sum([lit("b")]));
}

#[test]
fn test_substitute_all_is_simultaneous() {
    // Swapping a and b must not substitute into the replacements
    let expr = Operand::product([lit("a"), not(lit("b"))]);
    let mut replacements = BTreeMap::new();
    replacements.insert(Arc::from("a"), lit("b"));
    replacements.insert(Arc::from("b"), lit("a"));

    let swapped = expr.substitute_all(&replacements);
    assert_eq!(swapped, Operand::product([lit("b"), not(lit("a"))]));
}

// ========== Simplification ==========

#[test]
fn test_simplify_is_idempotent() {
    for operand in samples() {
        let once = operand.simplify();
        assert_eq!(once.simplify(), once, "simplify({})", operand);
    }
}

#[test]
fn test_double_negation_simplifies_away() {
    for operand in samples() {
        assert_eq!(not(not(operand.clone())).simplify(), operand.simplify());
    }
}

#[test]
fn test_constant_absorption() {
    for operand in samples() {
        let product = Operand::product([Operand::resolved(false), operand.clone()]);
        assert_eq!(product.simplify(), Operand::resolved(false));

        let sum = Operand::sum([Operand::resolved(true), operand]);
        assert_eq!(sum.simplify(), Operand::resolved(true));
    }
}

// ========== Expansion and Reduction ==========

#[test]
fn test_de_morgan_round_trip() {
    let a = lit("a");
    let b = not(lit("b"));
    let inverted = not(Operand::product([a.clone(), b.clone()]));
    let distributed = Operand::sum([not(a), not(b)]);

    let lhs = inverted.simplify().expand().unwrap();
    let rhs = distributed.simplify().expand().unwrap();
    assert_eq!(lhs.operand_type(), OperandType::Sum);
    assert_eq!(lhs, rhs);
    assert_eq!(lhs.to_string(), "(b) || (!(a))");
}

#[test]
fn test_absorption_minimization() {
    let a = lit("a");
    let b = lit("b");
    let expr = Operand::sum([
        Operand::product([a.clone()]),
        Operand::product([a.clone(), b]),
    ]);
    assert_eq!(expr.expand().unwrap(), Operand::sum([Operand::product([a])]));
}

#[test]
fn test_opposite_products_merge() {
    let expr = Operand::sum([
        Operand::product([lit("a"), lit("b")]),
        Operand::product([lit("a"), not(lit("b"))]),
        not(lit("c")),
    ]);
    assert_eq!(expr.reduce().unwrap().to_string(), "(a) || (!(c))");
}

#[test]
fn test_reduce_is_idempotent() {
    for operand in samples() {
        let reduced = operand.reduce().unwrap();
        let again = Reducer::new().reduce(&reduced).unwrap();
        assert_eq!(again, reduced, "reduce({})", operand);
    }
}

#[test]
fn test_reduce_preserves_truth_table() {
    for operand in samples() {
        let reduced = operand.reduce().unwrap();
        assert!(reduced.equivalent_to(&operand), "{} vs {}", reduced, operand);
    }
}

#[test]
fn test_reduce_output_is_sum_of_products() {
    for operand in samples() {
        let reduced = operand.reduce().unwrap();
        match reduced.kind() {
            OperandKind::Resolved(_) => {}
            OperandKind::Sum(products) => {
                for product in products {
                    let literals = product.children().unwrap();
                    assert_eq!(product.operand_type(), OperandType::Product);
                    assert!(literals.iter().all(Operand::is_literal));
                }
            }
            _ => assert!(reduced.is_literal(), "{}", reduced),
        }
        assert_eq!(reduced.expand().unwrap(), reduced);
    }
}

#[test]
fn test_reduce_without_complements_keeps_tautology_terms() {
    let config = ReduceConfig {
        detect_complements: false,
        ..ReduceConfig::default()
    };
    let expr = Operand::sum([lit("a"), not(lit("a"))]);
    let reduced = expr.reduce_with_config(&config).unwrap();
    assert_eq!(reduced.to_string(), "(a) || (!(a))");
    assert!(reduced.equivalent_to(&Operand::resolved(true)));
}
