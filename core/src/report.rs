//! Per-customer outcome reports — the raw input to the day-end model.
//!
//! The shop floor produces exactly one report per customer who walks
//! in, whether or not they end up buying. The model consumes each
//! report once and never mutates it.

use serde::{Deserialize, Serialize};

/// Why a customer left without buying.
/// Meaningful only when `ClientReport::has_bought` is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    /// No failure recorded. Scored as neutral.
    #[default]
    None,
    /// The shelf price drove them away.
    TooExpensive,
    /// The game they wanted was not in stock.
    NotFound,
    /// Nobody at the till when they were ready to pay.
    NoCashier,
    /// The item carried no price tag.
    NoPrice,
}

/// One customer interaction, as reported by the shop floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientReport {
    pub has_bought: bool,
    pub fail_reason: FailReason,
    /// Market price of the game the customer wanted.
    pub market_price: f64,
    /// Price paid at the till, or the shelf price that put them off.
    pub paid_price: f64,
}

impl ClientReport {
    /// A completed purchase at the given prices.
    pub fn bought(market_price: f64, paid_price: f64) -> Self {
        Self {
            has_bought: true,
            fail_reason: FailReason::None,
            market_price,
            paid_price,
        }
    }

    /// A failed visit. For `TooExpensive`, `paid_price` carries the
    /// shelf price the customer balked at.
    pub fn failed(fail_reason: FailReason, market_price: f64, paid_price: f64) -> Self {
        Self {
            has_bought: false,
            fail_reason,
            market_price,
            paid_price,
        }
    }
}
