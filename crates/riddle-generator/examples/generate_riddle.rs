//! Example demonstrating riddle generation.
//!
//! This example shows how to:
//! - Create a `RiddleGenerator` from options
//! - Generate a random riddle, retrying seeds that yield no usable riddle
//! - Display the facts, questions, and seed
//! - Sample many riddles in parallel and keep the one with the fewest facts
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_riddle
//! ```
//!
//! Pick the shortest riddle among many candidates (default budget: 1000):
//!
//! ```sh
//! cargo run --example generate_riddle -- --shortest --max-tries 1000
//! ```
//!
//! Change the board shape:
//!
//! ```sh
//! cargo run --example generate_riddle -- --size 4 --categories 6
//! ```

use std::process;

use clap::Parser;
use rand::Rng as _;
use rayon::prelude::*;
use riddle_generator::{GeneratedRiddle, RiddleGenerator, RiddleOptions, RiddleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of people.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    size: usize,

    /// Number of categories.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    categories: usize,

    /// Keep the riddle with the fewest facts among all sampled seeds.
    #[arg(long)]
    shortest: bool,

    /// Maximum seeds to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let options = RiddleOptions {
        size: args.size,
        categories: args.categories,
        ..RiddleOptions::default()
    };
    let generator = match RiddleGenerator::new(options) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            process::exit(2);
        }
    };

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = if args.shortest {
        (0..args.max_tries)
            .into_par_iter()
            .filter_map(|_| generator.generate_with_seed(random_seed()).ok())
            .min_by_key(|riddle| riddle.groups.len())
    } else {
        (0..args.max_tries).find_map(|_| generator.generate_with_seed(random_seed()).ok())
    };

    let Some(riddle) = best else {
        eprintln!("No usable riddle within {} tries.", args.max_tries);
        process::exit(1);
    };
    print_riddle(&riddle);
}

fn random_seed() -> RiddleSeed {
    rand::rng().random()
}

fn print_riddle(riddle: &GeneratedRiddle) {
    println!("Seed:");
    println!("  {}", riddle.seed);
    println!();

    println!("Facts:");
    for fact in riddle.facts() {
        println!("  - {fact}");
    }
    println!();

    println!("Questions:");
    for question in riddle.questions() {
        println!("  - {question}");
    }
}
