// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI tool to run examples of zipped traversals.

use clap::{Parser, ValueEnum};
use lockstep::{BidirectionalCursor, Cursor, Pairs, SizedSequence, Zip};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hint::black_box;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let left = fill_random(cli.input_size, cli.seed);
    let right_size = cli.right_size.unwrap_or(cli.input_size);
    let right = fill_random(right_size, cli.seed.wrapping_add(1));

    match cli.scenario {
        Scenario::Dot => match cli.container {
            Container::Vec => dot(&left, &right, cli.equal_lengths),
            Container::VecDeque => dot(
                &left,
                &right.into_iter().collect::<VecDeque<_>>(),
                cli.equal_lengths,
            ),
            Container::LinkedList => dot(
                &left,
                &right.into_iter().collect::<LinkedList<_>>(),
                cli.equal_lengths,
            ),
            Container::BTreeSet => dot(
                &left,
                &right.into_iter().collect::<BTreeSet<_>>(),
                cli.equal_lengths,
            ),
            Container::HashSet => dot(
                &left,
                &right.into_iter().collect::<HashSet<_>>(),
                cli.equal_lengths,
            ),
        },
        Scenario::Add => {
            let mut output = vec![0; cli.input_size];
            let mut zip = if cli.equal_lengths {
                Zip::new_eq((&mut output, left, right))
            } else {
                Zip::new((&mut output, left, right))
            };
            for (out, a, b) in zip.iter_mut() {
                *out = *a + *b;
            }
            drop(zip);
            let total = black_box(&output).iter().sum::<u64>();
            println!("added {} elements, total = {total}", output.len());
        }
        Scenario::Reverse => {
            let right = right.into_iter().collect::<LinkedList<_>>();
            let zip = Zip::new((&left, &right));
            println!("capability = {}", zip.capability());
            let last = zip.iter().rev().take(3).collect::<Vec<_>>();
            println!("last pairs = {last:?}");
        }
        Scenario::Deltas => match cli.container {
            Container::Vec => deltas(&left),
            Container::VecDeque => deltas(&left.into_iter().collect::<VecDeque<_>>()),
            Container::LinkedList => deltas(&left.into_iter().collect::<LinkedList<_>>()),
            Container::BTreeSet => deltas(&left.into_iter().collect::<BTreeSet<_>>()),
            Container::HashSet => {
                eprintln!("adjacent pairs need a bidirectional sequence");
                std::process::exit(2);
            }
        },
    }
}

/// Sums the products of the elements of `left` and `right`, in lockstep.
fn dot<'a, S>(left: &'a [u64], right: &'a S, equal_lengths: bool)
where
    S: SizedSequence,
    S::Cursor<'a>: Cursor<Ref = &'a u64>,
{
    let zip = if equal_lengths {
        Zip::new_eq((left, right))
    } else {
        Zip::new((left, right))
    };
    println!("capability = {}", zip.capability());
    let dot = zip.iter().map(|(a, b)| a * b).sum::<u64>();
    println!("zipped {} elements, dot = {dot}", zip.len());
}

/// Sums the absolute differences of adjacent elements of a sequence.
fn deltas<'a, S>(sequence: &'a S)
where
    S: SizedSequence,
    S::Cursor<'a>: BidirectionalCursor<Ref = &'a u64>,
{
    let pairs = Pairs::new(sequence);
    let total = pairs.iter().map(|(a, b)| a.abs_diff(*b)).sum::<u64>();
    println!("paired {} elements, total delta = {total}", pairs.len());
}

/// Creates a vector of `size` random numbers below 1000, from a fixed seed for
/// reproducibility.
fn fill_random(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..1000)).collect()
}

/// CLI tool to run examples of zipped traversals.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {
    /// Scenario to run.
    #[arg(long, value_enum)]
    scenario: Scenario,

    /// Container holding the second sequence. Used only for the dot and deltas
    /// scenarios.
    #[arg(long, value_enum, default_value_t = Container::Vec)]
    container: Container,

    /// Number of items in the first sequence.
    #[arg(long, default_value_t = 1_000_000)]
    input_size: usize,

    /// Number of items in the second sequence. Default to the input size.
    #[arg(long)]
    right_size: Option<usize>,

    /// Whether to require sequences of equal lengths.
    #[arg(long, default_value_t = false)]
    equal_lengths: bool,

    /// Seed of the random inputs.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Scenario to run.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Scenario {
    /// Sum the products of two sequences.
    Dot,
    /// Add two sequences element-wise.
    Add,
    /// Traverse two sequences backward.
    Reverse,
    /// Sum the differences of adjacent elements.
    Deltas,
}

/// Container type.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Container {
    /// A vector.
    Vec,
    /// A double-ended queue.
    VecDeque,
    /// A doubly-linked list.
    LinkedList,
    /// An ordered set.
    BTreeSet,
    /// A hash set.
    HashSet,
}
