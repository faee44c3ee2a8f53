//! Price calculation for motorized curtain tracks.
//!
//! The first meter of any track has a fixed price, every further meter is
//! billed at a rate that depends on the track geometry, and angled tracks pay
//! an additional surcharge per corner. The result is rounded to whole roubles.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Price of the first meter of any track.
pub const BASE_FIRST_METER: i64 = 7500;
/// Rate for every extra meter of straight and angled tracks.
pub const STRAIGHT_EXTRA_METER_RATE: i64 = 3600;
/// Rate for every extra meter of bay and arc tracks.
pub const CURVED_EXTRA_METER_RATE: i64 = 4300;
/// Surcharge for each corner of an angled track.
pub const CORNER_SURCHARGE: i64 = 1500;

/// Track geometry offered by the calculator.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WindowType {
    #[default]
    Straight,
    Angled,
    Bay,
    Arc,
}

impl WindowType {
    /// Human readable label used in lead messages.
    pub const fn label(self) -> &'static str {
        match self {
            WindowType::Straight => "Прямой",
            WindowType::Angled => "Угловой",
            WindowType::Bay => "Эркерный",
            WindowType::Arc => "Дуговой",
        }
    }

    /// Bay and arc tracks are bent and billed at the higher rate.
    pub const fn is_curved(self) -> bool {
        matches!(self, WindowType::Bay | WindowType::Arc)
    }
}

impl Display for WindowType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate charged for each meter beyond the first.
pub const fn price_per_extra_meter(window_type: WindowType) -> i64 {
    if window_type.is_curved() {
        CURVED_EXTRA_METER_RATE
    } else {
        STRAIGHT_EXTRA_METER_RATE
    }
}

/// Computes the track price in whole roubles.
///
/// Only the extra length is clamped at zero, so a negative `length` prices
/// like a one-meter track instead of being rejected.
pub fn calculate_cost(length: f64, window_type: WindowType, corners: u32) -> i64 {
    let extra_length = (length - 1.0).max(0.0);
    let rate = price_per_extra_meter(window_type) as f64;
    let length_cost = BASE_FIRST_METER as f64 + extra_length * rate;

    let total = if window_type == WindowType::Angled {
        length_cost + f64::from(corners) * CORNER_SURCHARGE as f64
    } else {
        length_cost
    };

    total.round() as i64
}

/// Calculator inputs as currently selected by the visitor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalculationParams {
    /// Track length in meters.
    pub length: f64,
    #[serde(rename = "type")]
    pub window_type: WindowType,
    /// Number of corners, only priced for angled tracks.
    pub corners: u32,
}

impl Default for CalculationParams {
    fn default() -> Self {
        Self {
            length: 2.0,
            window_type: WindowType::Straight,
            corners: 0,
        }
    }
}

impl CalculationParams {
    #[must_use]
    pub fn new(length: f64, window_type: WindowType, corners: u32) -> Self {
        Self {
            length,
            window_type,
            corners,
        }
    }

    /// Price for the current inputs, recomputed on every call.
    pub fn price(&self) -> i64 {
        calculate_cost(self.length, self.window_type, self.corners)
    }

    /// Itemised price for the rate breakdown shown next to the total.
    pub fn breakdown(&self) -> PriceBreakdown {
        let corner_surcharge = if self.window_type == WindowType::Angled {
            i64::from(self.corners) * CORNER_SURCHARGE
        } else {
            0
        };

        PriceBreakdown {
            base_first_meter: BASE_FIRST_METER,
            extra_length: (self.length - 1.0).max(0.0),
            price_per_extra_meter: price_per_extra_meter(self.window_type),
            corner_surcharge,
            total: self.price(),
        }
    }
}

/// Components of a computed price.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct PriceBreakdown {
    pub base_first_meter: i64,
    pub extra_length: f64,
    pub price_per_extra_meter: i64,
    pub corner_surcharge: i64,
    pub total: i64,
}

/// Formats an amount the way the ru-RU locale does, grouping thousands with
/// a no-break space.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
