//! DTOs exposed by the price quote endpoint.

use serde::Serialize;

use crate::domain::calculator::{CalculationParams, format_price};

/// Price and rate breakdown returned to the calculator widget.
#[derive(Debug, Serialize, PartialEq)]
pub struct PriceQuote {
    pub price: i64,
    /// Price formatted for display, e.g. `11 100 ₽`.
    pub formatted_price: String,
    pub base_first_meter: i64,
    pub extra_length: f64,
    pub price_per_extra_meter: i64,
    pub corner_surcharge: i64,
}

impl From<&CalculationParams> for PriceQuote {
    fn from(params: &CalculationParams) -> Self {
        let breakdown = params.breakdown();
        Self {
            price: breakdown.total,
            formatted_price: format!("{} ₽", format_price(breakdown.total)),
            base_first_meter: breakdown.base_first_meter,
            extra_length: breakdown.extra_length,
            price_per_extra_meter: breakdown.price_per_extra_meter,
            corner_surcharge: breakdown.corner_surcharge,
        }
    }
}
