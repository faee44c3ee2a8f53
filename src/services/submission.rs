//! Client-side lead submission: form handles, dispatch and the timed reset.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::domain::calculator::CalculationParams;
use crate::domain::lead::{FormId, LeadFields, LeadFormState, SubmissionStatus};
use crate::dto::relay::RelayPayload;
use crate::forms::lead::build_message;
use crate::gateway::RelayGateway;
use crate::gateway::errors::GatewayError;
use crate::services::ServiceResult;

/// Time a successful submission stays visible before the form is cleared.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

/// Notice shown to the visitor whenever a submission fails, whatever the cause.
pub const SUBMISSION_FAILED_NOTICE: &str = "Не удалось отправить заявку. Попробуйте ещё раз.";

/// Result of a submit action that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Preconditions were not met; nothing was sent.
    Ignored,
    /// The relay accepted the lead.
    Sent,
}

/// Handle to one lead form's state.
///
/// Clones share the same state, so the UI layer and the reset timer observe
/// the same form. Different forms never share anything.
#[derive(Clone, Debug)]
pub struct LeadForm {
    state: Arc<Mutex<LeadFormState>>,
}

impl LeadForm {
    pub fn new(form_id: FormId) -> Self {
        Self {
            state: Arc::new(Mutex::new(LeadFormState::new(form_id))),
        }
    }

    fn state(&self) -> MutexGuard<'_, LeadFormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn form_id(&self) -> FormId {
        self.state().form_id
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status()
    }

    /// Snapshot of the typed values.
    pub fn fields(&self) -> LeadFields {
        self.state().fields.clone()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.state().can_submit()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.state().fields.name = name.into();
    }

    pub fn set_phone(&self, phone: impl Into<String>) {
        self.state().fields.phone = phone.into();
    }

    pub fn set_comment(&self, comment: impl Into<String>) {
        self.state().fields.comment = comment.into();
    }

    pub fn set_consent(&self, consent: bool) {
        self.state().fields.consent = consent;
    }

    /// Replaces every field at once.
    pub fn fill(&self, fields: LeadFields) {
        self.state().fields = fields;
    }

    fn schedule_reset(&self, delay: Duration) {
        let form = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if form.state().reset_after_success() {
                log::debug!("Form {} reset after successful submission", form.form_id());
            }
        });
    }
}

/// Sends the form's lead to the relay.
///
/// Does nothing unless the phone is valid, consent is given and the form is
/// idle. Otherwise the form is `Sending` before the request starts and is
/// settled exactly once: `Success` followed by a reset after [`RESET_DELAY`],
/// or back to `Idle` with the error returned so the caller can show
/// [`SUBMISSION_FAILED_NOTICE`]. There is no retry.
pub async fn submit_lead<G>(
    gateway: &G,
    form: &LeadForm,
    params: &CalculationParams,
) -> ServiceResult<SubmitOutcome>
where
    G: RelayGateway + ?Sized,
{
    let payload = {
        let mut state = form.state();
        if !state.begin_sending() {
            return Ok(SubmitOutcome::Ignored);
        }
        RelayPayload {
            form_id: state.form_id,
            message: build_message(state.form_id, &state.fields, params),
        }
    };

    match gateway.send_lead(&payload).await {
        Ok(()) => {
            form.state().mark_success();
            log::info!("Lead from form {} delivered", payload.form_id);
            form.schedule_reset(RESET_DELAY);
            Ok(SubmitOutcome::Sent)
        }
        Err(err) => {
            form.state().mark_failed();
            match &err {
                GatewayError::Transport(reason) => {
                    log::error!("Lead from form {} not sent: {reason}", payload.form_id);
                }
                GatewayError::Rejected { status, body } => {
                    log::error!(
                        "Relay rejected lead from form {} with {status}: {body}",
                        payload.form_id
                    );
                }
            }
            Err(err.into())
        }
    }
}
