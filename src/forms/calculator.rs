//! Query form feeding the calculator widget's inputs into the pricing engine.

use serde::Deserialize;
use validator::Validate;

use crate::domain::calculator::{CalculationParams, WindowType};
use crate::forms::FormError;

/// Largest corner count the widget offers.
pub const MAX_CORNERS: u32 = 5;

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw calculator inputs as sent by the widget.
pub struct CalculatorQuery {
    /// Track length as typed; unparseable or zero input falls back to one meter.
    pub length: Option<String>,
    #[serde(rename = "type", default)]
    pub window_type: WindowType,
    #[serde(default)]
    #[validate(range(max = 5))]
    pub corners: u32,
}

fn parse_length(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(length) if length.is_nan() || length == 0.0 => Ok(1.0),
        Ok(length) if length.is_infinite() => Err(FormError::InvalidLength),
        Ok(length) => Ok(length),
        Err(_) => Ok(1.0),
    }
}

impl TryFrom<CalculatorQuery> for CalculationParams {
    type Error = FormError;

    fn try_from(query: CalculatorQuery) -> Result<Self, Self::Error> {
        query.validate()?;

        let length = match query.length.as_deref() {
            Some(raw) => parse_length(raw)?,
            None => CalculationParams::default().length,
        };

        Ok(CalculationParams::new(
            length,
            query.window_type,
            query.corners,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(length: Option<&str>, window_type: WindowType, corners: u32) -> CalculatorQuery {
        CalculatorQuery {
            length: length.map(str::to_string),
            window_type,
            corners,
        }
    }

    #[test]
    fn missing_length_uses_widget_default() {
        let params = CalculationParams::try_from(query(None, WindowType::Bay, 0)).unwrap();
        assert_eq!(params.length, 2.0);
        assert_eq!(params.window_type, WindowType::Bay);
    }

    #[test]
    fn garbage_or_zero_length_falls_back_to_one_meter() {
        for raw in ["", "abc", "0", " 0.0 ", "NaN"] {
            let params =
                CalculationParams::try_from(query(Some(raw), WindowType::Straight, 0)).unwrap();
            assert_eq!(params.length, 1.0, "input {raw:?}");
        }
    }

    #[test]
    fn negative_length_is_passed_through() {
        let params =
            CalculationParams::try_from(query(Some("-4"), WindowType::Straight, 0)).unwrap();
        assert_eq!(params.length, -4.0);
        assert_eq!(params.price(), 7500);
    }

    #[test]
    fn infinite_length_is_rejected() {
        let result = CalculationParams::try_from(query(Some("inf"), WindowType::Straight, 0));
        assert!(matches!(result, Err(FormError::InvalidLength)));
    }

    #[test]
    fn corners_above_widget_range_are_rejected() {
        let result = CalculationParams::try_from(query(Some("3"), WindowType::Angled, 6));
        assert!(matches!(result, Err(FormError::Validation(_))));

        let params =
            CalculationParams::try_from(query(Some("3"), WindowType::Angled, MAX_CORNERS)).unwrap();
        assert_eq!(params.corners, 5);
    }
}
