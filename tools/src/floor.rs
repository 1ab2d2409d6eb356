//! Shop floor simulation — one day of customer traffic.
//!
//! This is the collaborator the day-end model consumes reports from:
//! it decides, per customer, what they wanted, what it costs, and how
//! the visit ended. All randomness lives on this side of the boundary.

use gameshop_core::{
    config::ShopConfig,
    pricing::purchase_probability,
    report::{ClientReport, FailReason},
};

use crate::rng::FloorRng;

/// Catalog price range for the games customers come in for.
const MARKET_PRICE_MIN: f64 = 10.0;
const MARKET_PRICE_MAX: f64 = 70.0;

/// Shelf price as a multiplier on market price. The shop sometimes
/// discounts, mostly marks up.
const MARKUP_MIN: f64 = 0.90;
const MARKUP_MAX: f64 = 1.30;

/// Per-visit hazard rates, checked before the price decision.
const STOCKOUT_CHANCE: f64 = 0.08;
const MISSING_TAG_CHANCE: f64 = 0.03;
const NO_CASHIER_CHANCE: f64 = 0.04;

/// Simulate one trading day: `customer_count` visits against the
/// configured pricing model. Returns the reports plus the till total
/// after the day's sales.
pub fn run_shop_day(
    rng: &mut FloorRng,
    config: &ShopConfig,
    customer_count: u32,
    starting_cash: f64,
) -> (Vec<ClientReport>, f64) {
    let mut reports = Vec::with_capacity(customer_count as usize);
    let mut cash = starting_cash;

    for _ in 0..customer_count {
        let market_price = rng.range(MARKET_PRICE_MIN, MARKET_PRICE_MAX);
        let popularity = rng.next_f64();
        let shelf_price = market_price * rng.range(MARKUP_MIN, MARKUP_MAX);

        let report = if rng.chance(STOCKOUT_CHANCE) {
            ClientReport::failed(FailReason::NotFound, market_price, 0.0)
        } else if rng.chance(MISSING_TAG_CHANCE) {
            ClientReport::failed(FailReason::NoPrice, market_price, 0.0)
        } else if rng.chance(NO_CASHIER_CHANCE) {
            ClientReport::failed(FailReason::NoCashier, market_price, shelf_price)
        } else {
            let p = purchase_probability(
                market_price,
                shelf_price,
                popularity,
                config.pricing.base_price_sensitivity,
                config.pricing.perception_threshold,
            );

            if rng.chance(p) {
                cash += shelf_price;
                ClientReport::bought(market_price, shelf_price)
            } else {
                ClientReport::failed(FailReason::TooExpensive, market_price, shelf_price)
            }
        };

        reports.push(report);
    }

    log::debug!(
        "floor: {} visits, till ${starting_cash:.2} -> ${cash:.2}",
        reports.len()
    );

    (reports, cash)
}
