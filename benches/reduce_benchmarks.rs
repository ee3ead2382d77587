//! Benchmark suite for operand reduction
//!
//! Formulas are generated deterministically as products of sums (conjunctive
//! form), which is the worst case for distribution, and categorised by the
//! number of clauses.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sop_logic::{Operand, ReduceConfig, Reducer};

/// Size category of a generated formula
#[derive(Debug, Clone, Copy)]
enum Category {
    Small,  // 3 clauses
    Medium, // 5 clauses
    Large,  // 7 clauses
}

impl Category {
    fn as_str(&self) -> &str {
        match self {
            Category::Small => "small",
            Category::Medium => "medium",
            Category::Large => "large",
        }
    }

    fn clauses(&self) -> usize {
        match self {
            Category::Small => 3,
            Category::Medium => 5,
            Category::Large => 7,
        }
    }
}

const CATEGORIES: [Category; 3] = [Category::Small, Category::Medium, Category::Large];
const VARIABLES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// Linear congruential generator, so every run benchmarks the same formulas
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// A product of `clauses` sums, each over three distinct random literals
fn generate_formula(clauses: usize, seed: u64) -> Operand {
    let mut rng = Lcg(seed);
    Operand::product((0..clauses).map(|_| {
        let mut picked: Vec<usize> = Vec::with_capacity(3);
        while picked.len() < 3 {
            let index = rng.next() as usize % VARIABLES.len();
            if !picked.contains(&index) {
                picked.push(index);
            }
        }
        Operand::sum(picked.into_iter().map(|index| {
            let literal = Operand::unresolved(VARIABLES[index]);
            if rng.next() % 2 == 0 {
                literal
            } else {
                Operand::invert(literal)
            }
        }))
    }))
}

fn uncached() -> Reducer {
    Reducer::with_config(ReduceConfig {
        memoize: false,
        ..ReduceConfig::default()
    })
}

/// Benchmark: Local simplification only
fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for category in CATEGORIES {
        let formula = Operand::invert(Operand::invert(generate_formula(category.clauses(), 7)));

        group.throughput(Throughput::Elements(category.clauses() as u64));
        group.bench_with_input(
            BenchmarkId::new("simplify", category.as_str()),
            &formula,
            |b, formula| {
                b.iter(|| black_box(black_box(formula).simplify()));
            },
        );
    }

    group.finish();
}

/// Benchmark: Full reduction without memoisation
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for category in CATEGORIES {
        let formula = generate_formula(category.clauses(), 42);
        let reducer = uncached();

        group.throughput(Throughput::Elements(category.clauses() as u64));
        group.bench_with_input(
            BenchmarkId::new(category.as_str(), formula.to_string()),
            &formula,
            |b, formula| {
                b.iter(|| black_box(reducer.reduce(black_box(formula)).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark: Complement detection on and off
fn bench_complements(c: &mut Criterion) {
    let mut group = c.benchmark_group("complements");
    let formula = generate_formula(Category::Medium.clauses(), 1234);

    for detect_complements in [true, false] {
        let reducer = Reducer::with_config(ReduceConfig {
            memoize: false,
            detect_complements,
        });
        let param = if detect_complements { "on" } else { "off" };

        group.bench_with_input(
            BenchmarkId::new("detect_complements", param),
            &formula,
            |b, formula| {
                b.iter(|| black_box(reducer.reduce(black_box(formula)).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark: Re-reducing through a warm memo table
fn bench_memo_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo_hit");

    for category in CATEGORIES {
        let formula = generate_formula(category.clauses(), 99);
        let reducer = Reducer::new();
        let reduced = reducer.reduce(&formula).unwrap();

        group.bench_with_input(
            BenchmarkId::new(category.as_str(), "input"),
            &formula,
            |b, formula| {
                b.iter(|| black_box(reducer.reduce(black_box(formula)).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new(category.as_str(), "reduced"),
            &reduced,
            |b, reduced| {
                b.iter(|| black_box(reducer.is_reduced(black_box(reduced))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_simplify,
    bench_reduce,
    bench_complements,
    bench_memo_hit
);
criterion_main!(benches);
