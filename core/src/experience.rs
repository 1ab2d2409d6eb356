//! Customer experience scoring.
//!
//! Converts one `ClientReport` into a satisfaction score in [-1, 1].
//! The constants below are the tuning surface of the whole reputation
//! loop; every downstream number moves when they do, so they are pinned
//! by the integration tests.

use crate::report::{ClientReport, FailReason};

/// Flat score for completing a purchase at exactly market price.
pub const BASE_PURCHASE_SCORE: f64 = 0.2;
/// Bonus per unit of below-market discount ratio.
pub const DISCOUNT_BONUS_RATE: f64 = 0.8;
pub const MAX_DISCOUNT_BONUS: f64 = 0.6;
/// Penalty per unit of above-market overpay ratio.
pub const OVERPAY_PENALTY_RATE: f64 = 0.5;
pub const MAX_OVERPAY_PENALTY: f64 = 0.4;
/// Walked out over the price: penalty scales with the overpricing ratio,
/// with a floor so even a marginal markup registers.
pub const TOO_EXPENSIVE_PENALTY_RATE: f64 = 1.5;
pub const MIN_TOO_EXPENSIVE_PENALTY: f64 = 0.1;
pub const MAX_TOO_EXPENSIVE_PENALTY: f64 = 0.8;

/// Wanted a game the shop did not stock.
pub const NOT_FOUND_SCORE: f64 = -0.3;
/// Ready to pay, nobody at the till. The worst outcome: an
/// operational failure, not a pricing one.
pub const NO_CASHIER_SCORE: f64 = -0.9;
/// The item carried no price tag.
pub const NO_PRICE_SCORE: f64 = -0.6;

/// Score a single customer interaction.
///
/// Always lands in [-1, 1]. A non-positive market price on a purchase
/// scores 0 rather than dividing by it.
pub fn client_experience(report: &ClientReport) -> f64 {
    if report.has_bought {
        return purchase_experience(report.market_price, report.paid_price);
    }

    match report.fail_reason {
        FailReason::TooExpensive => {
            too_expensive_experience(report.market_price, report.paid_price)
        }
        FailReason::NotFound => NOT_FOUND_SCORE,
        FailReason::NoCashier => NO_CASHIER_SCORE,
        FailReason::NoPrice => NO_PRICE_SCORE,
        FailReason::None => 0.0,
    }
}

fn purchase_experience(market_price: f64, paid_price: f64) -> f64 {
    if market_price <= 0.0 {
        return 0.0;
    }

    let diff_ratio = (market_price - paid_price) / market_price;

    let discount_bonus = if diff_ratio > 0.0 {
        (diff_ratio * DISCOUNT_BONUS_RATE).clamp(0.0, MAX_DISCOUNT_BONUS)
    } else {
        0.0
    };

    let overpay_penalty = if diff_ratio < 0.0 {
        (-diff_ratio * OVERPAY_PENALTY_RATE).clamp(0.0, MAX_OVERPAY_PENALTY)
    } else {
        0.0
    };

    (BASE_PURCHASE_SCORE + discount_bonus - overpay_penalty).clamp(-1.0, 1.0)
}

fn too_expensive_experience(market_price: f64, shelf_price: f64) -> f64 {
    if market_price <= 0.0 {
        // No usable reference price; score it like a generic bad visit.
        return -0.3;
    }

    let over_ratio = (shelf_price - market_price) / market_price;
    -(over_ratio * TOO_EXPENSIVE_PENALTY_RATE)
        .clamp(MIN_TOO_EXPENSIVE_PENALTY, MAX_TOO_EXPENSIVE_PENALTY)
}
