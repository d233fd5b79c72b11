//! Opening-range chart printer.
//!
//! Prints the 13x13 starting-hand grid for every position (suited hands
//! above the diagonal, offsuit below) followed by the tier grid.
//!
//! Usage: `range_chart [config.json]`

use anyhow::{Context, Result};

use poker_trainer_core::{get_hand_strength_tier, HandClass, Position, Rank, TrainerConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = TrainerConfig::from_json_file(&path)
                .with_context(|| format!("loading config from {path}"))?;
            log::info!("loaded config from {}", path);
            config
        }
        None => TrainerConfig::default(),
    };
    let ranges = config.opening_ranges().context("building opening ranges")?;

    println!("=== Opening Ranges ===");
    for position in Position::ALL {
        let Some(range) = ranges.range(position) else {
            continue;
        };
        println!(
            "\n{} ({}): {} hands, {} combos, {:.1}%",
            position,
            position.full_name(),
            range.num_classes(),
            range.num_combos(),
            range.coverage() * 100.0
        );
        print_grid(|hc| {
            if range.contains_class(hc) {
                hc.to_string()
            } else {
                ".".to_string()
            }
        });
    }

    println!("\n=== Hand Tiers (1 = premium, 5 = trash) ===\n");
    print_grid(|hc| get_hand_strength_tier(&hc.to_string()).value().to_string());
    Ok(())
}

/// Print a 13x13 grid, aces first. Row rank is the first card; cells above
/// the diagonal are suited.
fn print_grid(cell: impl Fn(HandClass) -> String) {
    let ranks: Vec<Rank> = Rank::ALL.iter().rev().copied().collect();
    for (row, &r1) in ranks.iter().enumerate() {
        let line: Vec<String> = ranks
            .iter()
            .enumerate()
            .map(|(col, &r2)| format!("{:>4}", cell(HandClass::new(r1, r2, col > row))))
            .collect();
        println!("{}", line.join(""));
    }
}
