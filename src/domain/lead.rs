use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, validate_phone};

/// Lead capture forms present on the landing page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FormId {
    /// Calculator form requesting a price estimate.
    Quote,
    Consultation,
    Callback,
}

impl FormId {
    pub const ALL: [FormId; 3] = [FormId::Quote, FormId::Consultation, FormId::Callback];

    /// Label identifying the form in the lead notification.
    pub const fn label(self) -> &'static str {
        match self {
            FormId::Quote => "Получить смету (калькулятор)",
            FormId::Consultation => "Консультация",
            FormId::Callback => "Заказать звонок",
        }
    }

    /// Wire identifier sent to the relay.
    pub const fn as_str(self) -> &'static str {
        match self {
            FormId::Quote => "quote",
            FormId::Consultation => "consultation",
            FormId::Callback => "callback",
        }
    }
}

impl Display for FormId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormId::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown form id `{s}`")))
    }
}

/// Values typed into a lead form.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub consent: bool,
}

impl LeadFields {
    /// A lead may only be dispatched with a valid phone and given consent.
    pub fn is_dispatchable(&self) -> bool {
        self.consent && validate_phone(&self.phone)
    }

    /// Clears the typed text while keeping the consent flag.
    pub fn clear_text(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.comment.clear();
    }
}

/// Progress of a single form's submission.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

/// State owned by one lead form: its fields and submission status.
///
/// Transition methods return `false` and leave the state untouched when the
/// transition is not allowed from the current status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadFormState {
    pub form_id: FormId,
    pub fields: LeadFields,
    status: SubmissionStatus,
}

impl LeadFormState {
    #[must_use]
    pub fn new(form_id: FormId) -> Self {
        Self {
            form_id,
            fields: LeadFields::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Submit control is enabled only for an idle, dispatchable form.
    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle && self.fields.is_dispatchable()
    }

    /// idle -> sending
    pub fn begin_sending(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = SubmissionStatus::Sending;
        true
    }

    /// sending -> success
    pub fn mark_success(&mut self) -> bool {
        self.transition(SubmissionStatus::Sending, SubmissionStatus::Success)
    }

    /// sending -> idle
    pub fn mark_failed(&mut self) -> bool {
        self.transition(SubmissionStatus::Sending, SubmissionStatus::Idle)
    }

    /// success -> idle, clearing name, phone and comment.
    pub fn reset_after_success(&mut self) -> bool {
        if !self.transition(SubmissionStatus::Success, SubmissionStatus::Idle) {
            return false;
        }
        self.fields.clear_text();
        true
    }

    fn transition(&mut self, from: SubmissionStatus, to: SubmissionStatus) -> bool {
        if self.status != from {
            return false;
        }
        self.status = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(form_id: FormId) -> LeadFormState {
        let mut state = LeadFormState::new(form_id);
        state.fields = LeadFields {
            name: "Анна".to_string(),
            phone: "89937725252".to_string(),
            comment: "Позвоните вечером".to_string(),
            consent: true,
        };
        state
    }

    #[test]
    fn form_id_round_trips_through_str() {
        for id in FormId::ALL {
            assert_eq!(id.as_str().parse::<FormId>(), Ok(id));
        }
        assert!("calcForm".parse::<FormId>().is_err());
    }

    #[test]
    fn sending_requires_consent() {
        let mut state = filled(FormId::Callback);
        state.fields.consent = false;

        assert!(!state.begin_sending());
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn sending_requires_valid_phone() {
        let mut state = filled(FormId::Callback);
        state.fields.phone = "+7 (993) 772-52".to_string();

        assert!(!state.begin_sending());
    }

    #[test]
    fn full_cycle_clears_text_and_keeps_consent() {
        let mut state = filled(FormId::Quote);

        assert!(state.begin_sending());
        assert!(!state.begin_sending());
        assert!(state.mark_success());
        assert!(!state.can_submit());
        assert!(state.reset_after_success());

        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.fields.name.is_empty());
        assert!(state.fields.phone.is_empty());
        assert!(state.fields.comment.is_empty());
        assert!(state.fields.consent);
    }

    #[test]
    fn failure_returns_to_idle_with_fields_kept() {
        let mut state = filled(FormId::Consultation);

        assert!(state.begin_sending());
        assert!(state.mark_failed());

        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.fields.phone, "89937725252");
        assert!(!state.reset_after_success());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Sending).unwrap(),
            "\"sending\""
        );
    }
}
