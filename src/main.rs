use std::fmt::Display;
use std::process::ExitCode;

use aviary::{
    List, Value, and, beq, church, config, fibo, natural_numbers, not, or, range, range_list,
    registry, reverse, take, to_boolean, vec_to_list,
};
use clap::{Parser, Subcommand};
use num_bigint::BigInt;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "aviary",
    version,
    about = "Combinators, Church booleans and lazy sequences"
)]
struct Cli {
    /// Maximum nesting of combinator applications before giving up.
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first natural numbers.
    Naturals {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Print the first Fibonacci numbers.
    Fibo {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Print `low, low + step, ...` below `high`.
    Range {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        low: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        high: i64,
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        step: i64,
        /// Stop after this many values.
        #[arg(long, default_value_t = 1000)]
        limit: usize,
    },
    /// Print the inclusive range `low..=high` back to front.
    Reverse {
        #[arg(long, allow_hyphen_values = true)]
        low: i64,
        #[arg(long, allow_hyphen_values = true)]
        high: i64,
    },
    /// Print truth tables for not, and, or and beq.
    TruthTable,
    /// List the combinators known to `apply`.
    Birds,
    /// Apply a named combinator to integer arguments, one at a time.
    Apply {
        name: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<i64>,
    },
}

/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    if let Some(depth) = cli.max_depth {
        config::set_max_depth(depth);
    }
    debug!(max_depth = config::max_depth(), "starting");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Naturals { count } => print_list(take(count, natural_numbers::<u64>())),
        Command::Fibo { count } => print_list(take(count, fibo::<BigInt>())),
        Command::Range {
            low,
            high,
            step,
            limit,
        } => print_list(take(limit, range(low, high, step))),
        Command::Reverse { low, high } => {
            let list: List<i64> = range_list(low, high);
            print_list(reverse(list.iter().copied()));
        }
        Command::TruthTable => truth_table()?,
        Command::Birds => println!("{}", registry::names().join(" ")),
        Command::Apply { name, args } => {
            let Some(bird) = registry::lookup(&name) else {
                return Err(format!(
                    "unknown combinator {name} (known: {})",
                    registry::names().join(" ")
                ));
            };
            let result = bird.call(args.into_iter().map(Value::from))?;
            println!("{result}");
        }
    }
    Ok(())
}

fn print_list<T: Display>(seq: impl IntoIterator<Item = T>) {
    println!("{}", vec_to_list(seq));
}

fn truth_table() -> aviary::Result<()> {
    let bools = [true, false];

    for p in bools {
        println!("not {p:<5} = {}", to_boolean(&not(&church(p))?)?);
    }
    for p in bools {
        for q in bools {
            let (cp, cq) = (church(p), church(q));
            println!(
                "{p:<5} {q:<5} | and {:<5} or {:<5} beq {:<5}",
                to_boolean(&and(&cp, &cq)?)?,
                to_boolean(&or(&cp, &cq)?)?,
                to_boolean(&beq(&cp, &cq)?)?,
            );
        }
    }
    Ok(())
}
