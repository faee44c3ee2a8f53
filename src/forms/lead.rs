//! Lead form validation and the notification text built from it.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::calculator::{CalculationParams, WindowType, format_price};
use crate::domain::lead::{FormId, LeadFields};
use crate::domain::types::validate_phone;

/// Separator placed between message blocks.
const BLOCK_SEPARATOR: &str = "---";

fn phone_has_enough_digits(phone: &str) -> Result<(), ValidationError> {
    if validate_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_digits"))
    }
}

fn consent_given(consent: &bool) -> Result<(), ValidationError> {
    if *consent {
        Ok(())
    } else {
        Err(ValidationError::new("consent_required"))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for a lead capture form.
pub struct LeadInput {
    /// Visitor name, optional on every form.
    #[serde(default)]
    pub name: String,
    /// Contact phone in any formatting.
    #[validate(custom(function = "phone_has_enough_digits"))]
    pub phone: String,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
    /// Consent to personal data processing.
    #[serde(default)]
    #[validate(custom(function = "consent_given"))]
    pub consent: bool,
}

impl From<LeadInput> for LeadFields {
    fn from(input: LeadInput) -> Self {
        Self {
            name: input.name,
            phone: input.phone,
            comment: input.comment,
            consent: input.consent,
        }
    }
}

/// Builds the line-delimited lead report forwarded to the managers' chat.
///
/// The calculator block is only present for [`FormId::Quote`]; its price is
/// recomputed from `params`.
pub fn build_message(form_id: FormId, fields: &LeadFields, params: &CalculationParams) -> String {
    let mut lines = Vec::new();

    lines.push(format!("🟢 Новая заявка: {}", form_id.label()));
    if !fields.name.is_empty() {
        lines.push(format!("Имя: {}", fields.name));
    }
    lines.push(format!("Телефон: {}", fields.phone));

    if form_id == FormId::Quote {
        lines.push(BLOCK_SEPARATOR.to_string());
        lines.push("Калькулятор:".to_string());
        lines.push(format!("Длина: {} м", params.length));
        lines.push(format!("Тип: {}", params.window_type.label()));
        if params.window_type == WindowType::Angled {
            lines.push(format!("Углы: {}", params.corners));
        }
        lines.push(format!("Цена: {} ₽", format_price(params.price())));
    }

    if !fields.comment.is_empty() {
        lines.push(BLOCK_SEPARATOR.to_string());
        lines.push(format!("Комментарий: {}", fields.comment));
    }

    lines.join("\n")
}
