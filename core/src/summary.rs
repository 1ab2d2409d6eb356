//! Day summary assembly — one record per trading day.
//!
//! Pure orchestration over the other modules: tally the reports,
//! aggregate reputation, forecast tomorrow from the *updated*
//! reputation, copy the cash ledger through. Never fails; malformed
//! reports are absorbed by the scoring guards.

use serde::{Deserialize, Serialize};

use crate::{
    config::ShopConfig,
    forecast::clients_for_next_day,
    report::{ClientReport, FailReason},
    reputation::{apply_delta, end_of_day_delta},
};

/// Failed visits broken down by reason.
///
/// `unspecified` counts failed reports that carried no reason, so the
/// breakdown always sums to the failed-purchase total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailBreakdown {
    pub too_expensive: u32,
    pub not_found: u32,
    pub no_cashier: u32,
    pub no_price: u32,
    pub unspecified: u32,
}

impl FailBreakdown {
    pub fn total(&self) -> u32 {
        self.too_expensive + self.not_found + self.no_cashier + self.no_price + self.unspecified
    }

    fn record(&mut self, reason: FailReason) {
        match reason {
            FailReason::TooExpensive => self.too_expensive += 1,
            FailReason::NotFound => self.not_found += 1,
            FailReason::NoCashier => self.no_cashier += 1,
            FailReason::NoPrice => self.no_price += 1,
            FailReason::None => self.unspecified += 1,
        }
    }
}

/// Caller state feeding one day-end computation.
///
/// Reputation and cash are threaded through by value, day after day;
/// nothing here outlives the call.
#[derive(Debug, Clone, Copy)]
pub struct DayContext {
    pub current_reputation: f64,
    pub daily_reputation_factor: f64,
    pub min_clients: u32,
    pub max_clients: u32,
    pub starting_cash: f64,
    pub ending_cash: f64,
}

impl DayContext {
    /// Pull the tunables from config; the rest is per-day caller state.
    pub fn from_config(
        config: &ShopConfig,
        current_reputation: f64,
        starting_cash: f64,
        ending_cash: f64,
    ) -> Self {
        Self {
            current_reputation,
            daily_reputation_factor: config.reputation.daily_reputation_factor,
            min_clients: config.forecast.min_clients,
            max_clients: config.forecast.max_clients,
            starting_cash,
            ending_cash,
        }
    }
}

/// Everything one trading day produced, in a single immutable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub total_customers: u32,
    pub successful_purchases: u32,
    pub failed_purchases: u32,
    pub fail_breakdown: FailBreakdown,
    /// Mean experience score over the day, in [-1, 1].
    pub average_experience: f64,
    pub delta_reputation: f64,
    /// Reputation after applying the delta, in [0, 1].
    pub new_reputation: f64,
    pub expected_customers_tomorrow: u32,
    pub starting_cash: f64,
    pub ending_cash: f64,
}

/// Build the day's summary from the shop floor reports.
pub fn build_day_summary(reports: &[ClientReport], ctx: &DayContext) -> DaySummary {
    let mut successful = 0u32;
    let mut breakdown = FailBreakdown::default();

    for report in reports {
        if report.has_bought {
            successful += 1;
        } else {
            breakdown.record(report.fail_reason);
        }
    }
    let failed = breakdown.total();

    let (delta, average_experience) = end_of_day_delta(reports, ctx.daily_reputation_factor);
    let new_reputation = apply_delta(ctx.current_reputation, delta);
    let expected = clients_for_next_day(new_reputation, ctx.min_clients, ctx.max_clients);

    log::debug!(
        "day summary: {} customers ({successful} bought), avg_exp={average_experience:.3}, \
         rep {:.3} -> {new_reputation:.3}, tomorrow {expected}",
        reports.len(),
        ctx.current_reputation,
    );

    DaySummary {
        total_customers: reports.len() as u32,
        successful_purchases: successful,
        failed_purchases: failed,
        fail_breakdown: breakdown,
        average_experience,
        delta_reputation: delta,
        new_reputation,
        expected_customers_tomorrow: expected,
        starting_cash: ctx.starting_cash,
        ending_cash: ctx.ending_cash,
    }
}
