//! Price quotes for the calculator widget.

use crate::domain::calculator::CalculationParams;
use crate::dto::calculator::PriceQuote;
use crate::forms::calculator::CalculatorQuery;
use crate::services::ServiceResult;

/// Validates the widget inputs and prices them.
pub fn quote(query: CalculatorQuery) -> ServiceResult<PriceQuote> {
    let params = CalculationParams::try_from(query).map_err(|err| {
        log::warn!("Rejected calculator input: {err}");
        err
    })?;

    Ok(PriceQuote::from(&params))
}
