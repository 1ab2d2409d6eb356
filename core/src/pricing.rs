//! Price perception and purchase probability.
//!
//! Two customer behaviors live here:
//!   - Psychological rounding: a $4.75 shelf price reads as $4 to most
//!     customers, so the perceived price drives the buy decision, not
//!     the printed one.
//!   - Popularity-weighted price sensitivity: a popular title sells
//!     despite a markup; an obscure one does not.

use crate::math::lerp;

/// Upper bound for the perception threshold. At 0.99 every fraction
/// short of the next whole unit still reads as the lower price.
pub const MAX_PERCEPTION_THRESHOLD: f64 = 0.99;

/// Sensitivity multiplier at popularity 0 — nobody wants it, price
/// matters most.
pub const LOW_POPULARITY_MULTIPLIER: f64 = 1.3;
/// Sensitivity multiplier at popularity 1 — everyone wants it, price
/// matters least.
pub const HIGH_POPULARITY_MULTIPLIER: f64 = 0.7;

/// The price a customer subjectively registers.
///
/// The threshold is clamped to [0, 0.99]. A fractional part at or
/// below it rounds the price down to the whole unit; anything above
/// rounds up. Negative prices are outside the model's domain and pass
/// through unchanged.
pub fn perceived_price(price: f64, perception_threshold: f64) -> f64 {
    let threshold = perception_threshold.clamp(0.0, MAX_PERCEPTION_THRESHOLD);

    if price < 0.0 {
        return price;
    }

    let int_part = price.floor();
    let fraction = price - int_part;

    if fraction <= threshold {
        int_part
    } else {
        int_part + 1.0
    }
}

/// Probability in [0, 1] that a customer buys at `store_price`.
///
/// Returns 0 when the market price is non-positive — there is no
/// reference point to judge the shelf price against. At or under the
/// (perceived) market price the probability is exactly 1: being cheap
/// is never penalised. Above it, the probability falls linearly with
/// the overprice ratio, scaled by the popularity-adjusted sensitivity.
pub fn purchase_probability(
    market_price: f64,
    store_price: f64,
    popularity: f64,
    base_sensitivity: f64,
    perception_threshold: f64,
) -> f64 {
    if market_price <= 0.0 {
        return 0.0;
    }

    let perceived = perceived_price(store_price, perception_threshold);
    let overprice_ratio = perceived / market_price - 1.0;

    let popularity = popularity.clamp(0.0, 1.0);
    let multiplier = lerp(
        LOW_POPULARITY_MULTIPLIER,
        HIGH_POPULARITY_MULTIPLIER,
        popularity,
    );
    let sensitivity = base_sensitivity * multiplier;

    if overprice_ratio <= 0.0 {
        return 1.0;
    }

    (1.0 - overprice_ratio * sensitivity).clamp(0.0, 1.0)
}
