//! Display formatting for the day summary panel.
//!
//! The day-end model hands back plain numbers; everything string- or
//! color-shaped happens here, on the presentation side of the
//! boundary. Formatting rules mirror the in-game summary panel:
//! signed percentages for reputation movement, cash rounded to whole
//! currency, experience to two decimals.

use gameshop_core::clock::DaySchedule;
use gameshop_core::summary::DaySummary;

/// Tint for a signed figure on the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelColor {
    Green,
    Red,
}

impl PanelColor {
    /// Green for gains, including exact zero; red for losses.
    fn for_signed(value: f64) -> Self {
        if value >= 0.0 {
            Self::Green
        } else {
            Self::Red
        }
    }
}

/// The summary panel's fields, ready to render.
#[derive(Debug, Clone)]
pub struct DaySummaryPanel {
    pub total_customers: String,
    pub successful_purchases: String,
    pub failed_purchases: String,
    /// Multi-line breakdown of the four named fail reasons.
    pub fail_reasons: String,
    pub avg_experience: String,
    pub delta_reputation: String,
    pub delta_reputation_color: PanelColor,
    pub new_reputation: String,
    pub expected_customers_tomorrow: String,
    pub starting_cash: String,
    pub ending_cash: String,
    pub daily_profit: String,
    pub daily_profit_color: PanelColor,
}

pub fn format_day_summary(summary: &DaySummary) -> DaySummaryPanel {
    let fail_reasons = format!(
        "Too Expensive: {}\nNot Found: {}\nNo Cashier: {}\nNo Price: {}",
        summary.fail_breakdown.too_expensive,
        summary.fail_breakdown.not_found,
        summary.fail_breakdown.no_cashier,
        summary.fail_breakdown.no_price,
    );

    let profit = summary.ending_cash - summary.starting_cash;

    DaySummaryPanel {
        total_customers: summary.total_customers.to_string(),
        successful_purchases: summary.successful_purchases.to_string(),
        failed_purchases: summary.failed_purchases.to_string(),
        fail_reasons,
        avg_experience: format!("{:.2}", summary.average_experience),
        delta_reputation: format!("{:+.2}%", summary.delta_reputation * 100.0),
        delta_reputation_color: PanelColor::for_signed(summary.delta_reputation),
        new_reputation: format!("{:.0}%", summary.new_reputation * 100.0),
        expected_customers_tomorrow: summary.expected_customers_tomorrow.to_string(),
        starting_cash: format!("${}", summary.starting_cash.round() as i64),
        ending_cash: format!("${}", summary.ending_cash.round() as i64),
        daily_profit: format!("{:+}$", profit.round() as i64),
        daily_profit_color: PanelColor::for_signed(profit),
    }
}

/// The wall clock shown in the shop HUD, as zero-padded "HH:MM".
pub fn shop_time_text(schedule: &DaySchedule, elapsed_secs: f64) -> String {
    let t = schedule.virtual_time(elapsed_secs);
    format!("{:02}:{:02}", t.hour, t.minute)
}
