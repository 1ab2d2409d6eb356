//! Daily reputation aggregation.
//!
//! Averages the day's experience scores and converts the mean into a
//! bounded reputation movement. The store's reputation itself is
//! caller state; this module only computes and applies deltas.

use crate::experience::client_experience;
use crate::report::ClientReport;

/// Average the day's scores and derive the reputation delta.
///
/// Returns `(delta, average_experience)`. An empty day moves nothing:
/// both values are exactly zero.
pub fn end_of_day_delta(reports: &[ClientReport], daily_reputation_factor: f64) -> (f64, f64) {
    if reports.is_empty() {
        return (0.0, 0.0);
    }

    let sum: f64 = reports.iter().map(client_experience).sum();
    let average_experience = sum / reports.len() as f64;

    (average_experience * daily_reputation_factor, average_experience)
}

/// Apply a delta to the store's reputation, keeping it in [0, 1].
pub fn apply_delta(current_reputation: f64, delta: f64) -> f64 {
    (current_reputation + delta).clamp(0.0, 1.0)
}
