//! Randomized audit of the hand evaluator.
//!
//! Deals seeded random 7-card hands in parallel and checks that the best
//! 7-card strength is at least the strength of every 5-card subset and that
//! tiebreaker lengths match the category. Prints category frequencies.
//!
//! Usage: `verify_eval [samples] [seed]`

use std::time::Instant;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use poker_trainer_core::{Card, Deck, HandEvaluator, HandRank};

const DEFAULT_SAMPLES: u64 = 100_000;
const DEFAULT_SEED: u64 = 42;

/// Outcome of checking one hand.
struct Sample {
    rank: HandRank,
    violation: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let samples: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid sample count {s:?}"))?,
        None => DEFAULT_SAMPLES,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
        None => DEFAULT_SEED,
    };

    println!("=== Hand Evaluator Audit ===");
    println!("Samples: {}, seed: {}\n", samples, seed);
    log::info!("using {} threads", rayon::current_num_threads());

    let pb = ProgressBar::new(samples);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let evaluator = HandEvaluator::new();
    let results: Vec<Sample> = (0..samples)
        .into_par_iter()
        .map(|i| {
            let sample = check_hand(&evaluator, seed.wrapping_add(i));
            pb.inc(1);
            sample
        })
        .collect::<poker_trainer_core::Result<_>>()?;
    pb.finish_and_clear();

    let elapsed = start.elapsed();
    println!("Checked {} hands in {:.2}s\n", results.len(), elapsed.as_secs_f64());

    let mut counts = [0u64; 10];
    for sample in &results {
        counts[sample.rank.value() as usize - 1] += 1;
    }

    println!("{:<18}{:>10}{:>10}", "Category", "Count", "Freq");
    for rank in HandRank::ALL.iter().rev() {
        let count = counts[rank.value() as usize - 1];
        println!(
            "{:<18}{:>10}{:>9.3}%",
            rank.name(),
            count,
            count as f64 / samples.max(1) as f64 * 100.0
        );
    }

    let violations: Vec<&String> = results.iter().filter_map(|s| s.violation.as_ref()).collect();
    for v in violations.iter().take(10) {
        log::error!("{}", v);
    }
    if !violations.is_empty() {
        bail!("{} invariant violations", violations.len());
    }

    println!("\nAll invariants hold.");
    Ok(())
}

/// Deal one seeded 7-card hand and check it against all its 5-card subsets.
fn check_hand(evaluator: &HandEvaluator, seed: u64) -> poker_trainer_core::Result<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let cards = deck.deal(7)?;

    let (best, _) = evaluator.best_hand(&cards)?;
    let mut violation = None;
    if best.tiebreakers.len() != best.rank.tiebreaker_len() {
        violation = Some(format!("{:?}: bad tiebreakers {:?}", cards, best));
    }

    for skip1 in 0..7 {
        for skip2 in (skip1 + 1)..7 {
            let subset: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip1 && i != skip2)
                .map(|(_, &c)| c)
                .collect();
            let strength = evaluator.evaluate(&subset)?;
            if strength > best {
                violation = Some(format!("{:?}: subset {:?} beats best {:?}", cards, strength, best));
            }
        }
    }

    Ok(Sample {
        rank: best.rank,
        violation,
    })
}
