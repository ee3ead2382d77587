//! sop-reduce - Command Line Interface
//!
//! Runs a built-in formula through substitution, simplification and reduction
//! and prints each stage. Formulas are not parsed from text; pick one with
//! `--demo`.

use clap::{ArgAction, Parser, ValueEnum};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use sop_logic::{operand, Dnf, Operand, ReduceConfig, Reducer};
use std::collections::BTreeMap;
use std::process;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// (a + b) * (a + c)
    Distributive,
    /// !(a * (b + !c))
    DeMorgan,
    /// a * b + a * !b + !c
    Opposites,
    /// a * !b + !a * b
    Xor,
    /// !test
    Inverted,
    /// (x + y) * (!x + z) * (y + z)
    Consensus,
}

impl Demo {
    fn operand(self) -> Operand {
        match self {
            Demo::Distributive => operand!(("a" + "b") * ("a" + "c")),
            Demo::DeMorgan => operand!(!("a" * ("b" + !"c"))),
            Demo::Opposites => operand!("a" * "b" + "a" * !"b" + !"c"),
            Demo::Xor => operand!("a" * !"b" + !"a" * "b"),
            Demo::Inverted => operand!(!"test"),
            Demo::Consensus => operand!(("x" + "y") * (!"x" + "z") * ("y" + "z")),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sop-reduce")]
#[command(about = "Reduce boolean formulas to minimised sum-of-products form", long_about = None)]
#[command(version)]
struct Args {
    /// Formula to reduce
    #[arg(short = 'd', long = "demo", value_enum, default_value = "distributive")]
    demo: Demo,

    /// Substitute a variable before reducing: NAME=0, NAME=1 or NAME=OTHER
    #[arg(short = 's', long = "substitute", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    substitutions: Vec<(Arc<str>, Operand)>,

    /// Disable the memo table
    #[arg(long = "no-memo")]
    no_memo: bool,

    /// Only apply absorption; keep opposite and contradictory products
    #[arg(long = "no-complements")]
    no_complements: bool,

    /// Print the cubes of the reduced formula
    #[arg(long = "dnf")]
    dnf: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn parse_assignment(arg: &str) -> Result<(Arc<str>, Operand), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found '{}'", arg))?;
    if name.is_empty() || value.is_empty() {
        return Err(format!("expected NAME=VALUE, found '{}'", arg));
    }
    let replacement = match value {
        "0" => Operand::resolved(false),
        "1" => Operand::resolved(true),
        other => Operand::unresolved(other),
    };
    Ok((Arc::from(name), replacement))
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = ReduceConfig {
        memoize: !args.no_memo,
        detect_complements: !args.no_complements,
    };
    let reducer = Reducer::with_config(config);

    let input = args.demo.operand();
    println!("input:       {}", input);

    let replacements: BTreeMap<Arc<str>, Operand> = args.substitutions.into_iter().collect();
    let substituted = input.substitute_all(&replacements);
    if !replacements.is_empty() {
        println!("substituted: {}", substituted);
    }

    println!("simplified:  {}", substituted.simplify());

    let reduced = match reducer.reduce(&substituted) {
        Ok(reduced) => reduced,
        Err(e) => {
            eprintln!("Error reducing '{}': {}", substituted, e);
            process::exit(1);
        }
    };
    println!("reduced:     {}", reduced);

    if args.dnf {
        let dnf = match Dnf::from_reduced(&reduced) {
            Ok(dnf) => dnf,
            Err(e) => {
                eprintln!("Error reading cubes of '{}': {}", reduced, e);
                process::exit(1);
            }
        };
        println!("cubes:       {}", dnf.len());
        for cube in dnf.iter() {
            let literals: Vec<String> = cube
                .iter()
                .map(|(name, &polarity)| {
                    if polarity {
                        name.to_string()
                    } else {
                        format!("!{}", name)
                    }
                })
                .collect();
            println!("  {{{}}}", literals.join(", "));
        }
    }

    log::info!("memo entries: {}", reducer.memo_len());
}
