//! crates/receipt_processor_core/src/scoring.rs
//!
//! The points rules applied to a stored receipt. Scoring is a pure function of
//! the receipt: no state, no I/O, and the same receipt always yields the same
//! score.

use crate::domain::{Item, Receipt};
use chrono::{Datelike, NaiveTime, Timelike};
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Everything that is not a letter, a digit or a plain space.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N} ]+").expect("Invalid retailer regex"));

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_START_SECS: u32 = 14 * 60 * 60;
const AFTERNOON_END_SECS: u32 = 16 * 60 * 60;

/// The contribution of each rule to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl ScoreBreakdown {
    /// The sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the points for a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// Computes every rule's contribution separately.
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(receipt.total),
        quarter_multiple_total: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_purchase_day: odd_day_points(receipt.purchase_date.day()),
        afternoon_purchase: afternoon_points(receipt.purchase_time),
    }
}

/// One point per letter or digit in the retailer name.
fn retailer_name_points(retailer: &str) -> u64 {
    let stripped = NON_ALPHANUMERIC.replace_all(retailer, "");
    stripped.chars().filter(|c| *c != ' ').count() as u64
}

fn round_dollar_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> u64 {
    if (total % Decimal::new(25, 2)).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    ((item_count / 2) as u64).saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// `ceil(price * 0.2)` when the trimmed description length is a positive
/// multiple of three. An all-whitespace description earns nothing.
fn item_description_points(item: &Item) -> u64 {
    let length = item.description.trim().chars().count();
    if length == 0 || length % 3 != 0 {
        return 0;
    }
    // parse_amount caps prices far below u64::MAX; a larger hand-built price
    // saturates rather than scoring nothing.
    let points = (item.price * Decimal::new(2, 1)).ceil().max(Decimal::ZERO);
    points.to_u64().unwrap_or(u64::MAX)
}

fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Strictly between 14:00 and 16:00; both endpoints are excluded.
fn afternoon_points(time: NaiveTime) -> u64 {
    let seconds = time.num_seconds_from_midnight();
    if seconds > AFTERNOON_START_SECS && seconds < AFTERNOON_END_SECS {
        AFTERNOON_POINTS
    } else {
        0
    }
}
