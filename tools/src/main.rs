//! shop-runner: headless day-loop runner for the game-shop simulation.
//!
//! Drives the core day-end model over a configurable number of trading
//! days. Customer traffic is generated here, on the shop floor side of
//! the boundary — the core model itself never rolls dice.
//!
//! Usage:
//!   shop-runner --seed 42 --days 30
//!   shop-runner --config data/shop.json --json

mod display;
mod floor;
mod rng;

use anyhow::Result;
use gameshop_core::{
    config::ShopConfig,
    forecast::clients_for_next_day,
    summary::{build_day_summary, DayContext, DaySummary},
};
use std::env;

use crate::rng::FloorRng;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let days = parse_arg(&args, "--days", 7u64);
    let starting_cash = parse_arg(&args, "--cash", 500.0f64);
    let json_mode = args.iter().any(|a| a == "--json");

    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => ShopConfig::load(&w[1])?,
        None => ShopConfig::default_test(),
    };

    if !json_mode {
        println!("Game Shop Simulator — shop-runner");
        println!("  seed: {seed}");
        println!("  days: {days}");
        println!("  cash: ${starting_cash:.0}");
        println!();
    }

    let mut rng = FloorRng::new(seed);
    let mut reputation = config.reputation.initial_reputation;
    let mut cash = starting_cash;
    let mut customers_today = clients_for_next_day(
        reputation,
        config.forecast.min_clients,
        config.forecast.max_clients,
    );

    for day in 1..=days {
        let (reports, ending_cash) = floor::run_shop_day(&mut rng, &config, customers_today, cash);

        let ctx = DayContext::from_config(&config, reputation, cash, ending_cash);
        let summary = build_day_summary(&reports, &ctx);

        if json_mode {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            print_day(day, &summary);
        }

        reputation = summary.new_reputation;
        cash = summary.ending_cash;
        customers_today = summary.expected_customers_tomorrow;
    }

    if !json_mode {
        println!("=== RUN SUMMARY ===");
        println!("  days run:   {days}");
        println!("  reputation: {:.0}%", reputation * 100.0);
        println!("  cash:       ${:.0}", cash);
    }

    Ok(())
}

fn print_day(day: u64, summary: &DaySummary) {
    let panel = display::format_day_summary(summary);

    println!("=== DAY {day} ===");
    println!("  customers:  {}", panel.total_customers);
    println!("  bought:     {}", panel.successful_purchases);
    println!("  failed:     {}", panel.failed_purchases);
    for line in panel.fail_reasons.lines() {
        println!("    {line}");
    }
    println!("  avg exp:    {}", panel.avg_experience);
    println!("  delta rep:  {}", panel.delta_reputation);
    println!("  reputation: {}", panel.new_reputation);
    println!("  tomorrow:   {}", panel.expected_customers_tomorrow);
    println!(
        "  cash:       {} -> {} ({})",
        panel.starting_cash, panel.ending_cash, panel.daily_profit
    );
    println!();
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
