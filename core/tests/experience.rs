//! Experience scoring tests.
//!
//! Each scenario pins an exact score from the scoring policy. These
//! values are behavioral contracts, not tuning suggestions — the
//! reputation loop and everything downstream depends on them.

use gameshop_core::experience::{
    client_experience, BASE_PURCHASE_SCORE, NOT_FOUND_SCORE, NO_CASHIER_SCORE, NO_PRICE_SCORE,
};
use gameshop_core::report::{ClientReport, FailReason};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{label}: expected {expected}, got {actual}"
    );
}

#[test]
fn purchase_at_market_price_scores_the_base() {
    let score = client_experience(&ClientReport::bought(100.0, 100.0));
    assert_close(score, BASE_PURCHASE_SCORE, "at-market purchase");
}

#[test]
fn half_price_purchase_earns_the_discount_bonus() {
    // diff_ratio 0.5 -> bonus 0.4 -> score 0.6
    let score = client_experience(&ClientReport::bought(100.0, 50.0));
    assert_close(score, 0.6, "half-price purchase");
}

#[test]
fn deep_discount_bonus_is_capped() {
    // diff_ratio 0.9 -> raw bonus 0.72, capped at 0.6 -> score 0.8
    let score = client_experience(&ClientReport::bought(100.0, 10.0));
    assert_close(score, 0.8, "near-free purchase");
}

#[test]
fn overpaying_erodes_the_base_score() {
    // diff_ratio -0.5 -> penalty 0.25 -> score -0.05
    let score = client_experience(&ClientReport::bought(100.0, 150.0));
    assert_close(score, -0.05, "50% overpay");
}

#[test]
fn overpay_penalty_is_capped() {
    // diff_ratio -2.0 -> raw penalty 1.0, capped at 0.4 -> score -0.2
    let score = client_experience(&ClientReport::bought(100.0, 300.0));
    assert_close(score, -0.2, "3x overpay");
}

#[test]
fn purchase_without_market_price_is_neutral() {
    let score = client_experience(&ClientReport::bought(0.0, 42.0));
    assert_eq!(score, 0.0, "zero market price must score exactly 0");

    let score = client_experience(&ClientReport::bought(-5.0, 42.0));
    assert_eq!(score, 0.0, "negative market price must score exactly 0");
}

#[test]
fn too_expensive_penalty_scales_with_the_markup() {
    // over_ratio 0.2 -> penalty 0.3
    let report = ClientReport::failed(FailReason::TooExpensive, 100.0, 120.0);
    assert_close(client_experience(&report), -0.3, "20% markup walkout");
}

#[test]
fn too_expensive_penalty_has_a_floor() {
    // over_ratio 0.01 -> raw penalty 0.015, floored at 0.1
    let report = ClientReport::failed(FailReason::TooExpensive, 100.0, 101.0);
    assert_close(client_experience(&report), -0.1, "marginal markup walkout");
}

#[test]
fn too_expensive_penalty_is_capped() {
    // over_ratio 1.0 -> raw penalty 1.5, capped at 0.8
    let report = ClientReport::failed(FailReason::TooExpensive, 100.0, 200.0);
    assert_close(client_experience(&report), -0.8, "2x markup walkout");
}

#[test]
fn too_expensive_without_market_price_uses_the_fallback() {
    let report = ClientReport::failed(FailReason::TooExpensive, 0.0, 120.0);
    assert_close(client_experience(&report), -0.3, "walkout with no market price");
}

#[test]
fn not_found_scores_its_sentinel() {
    let report = ClientReport::failed(FailReason::NotFound, 55.0, 0.0);
    assert_eq!(client_experience(&report), NOT_FOUND_SCORE);
}

#[test]
fn no_cashier_is_the_worst_outcome_regardless_of_prices() {
    for (market, paid) in [(0.0, 0.0), (100.0, 50.0), (-3.0, 1e9)] {
        let report = ClientReport::failed(FailReason::NoCashier, market, paid);
        assert_eq!(
            client_experience(&report),
            NO_CASHIER_SCORE,
            "no-cashier must score -0.9 for market={market}, paid={paid}"
        );
    }
}

#[test]
fn missing_price_tag_scores_its_sentinel() {
    let report = ClientReport::failed(FailReason::NoPrice, 30.0, 0.0);
    assert_eq!(client_experience(&report), NO_PRICE_SCORE);
}

#[test]
fn failed_visit_without_a_reason_is_neutral() {
    let report = ClientReport::failed(FailReason::None, 30.0, 30.0);
    assert_eq!(client_experience(&report), 0.0);
}

/// The score must stay in [-1, 1] for any input, including garbage.
#[test]
fn score_is_always_bounded() {
    let prices = [-1e6, -1.0, 0.0, 0.01, 1.0, 99.99, 1e6];
    let reasons = [
        FailReason::None,
        FailReason::TooExpensive,
        FailReason::NotFound,
        FailReason::NoCashier,
        FailReason::NoPrice,
    ];

    for &market in &prices {
        for &paid in &prices {
            for &has_bought in &[true, false] {
                for &fail_reason in &reasons {
                    let report = ClientReport {
                        has_bought,
                        fail_reason,
                        market_price: market,
                        paid_price: paid,
                    };
                    let score = client_experience(&report);
                    assert!(
                        (-1.0..=1.0).contains(&score),
                        "score {score} out of [-1, 1] for {report:?}"
                    );
                }
            }
        }
    }
}
