use std::fmt;

use crate::{
    form::FormSnapshot,
    service::{RegistrationRequest, RegistrationService, SubmissionError},
    validation::{validate_with, ErrorMap, ValidationRules},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editing => write!(f, "editing"),
            Self::Submitting => write!(f, "submitting"),
        }
    }
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The form did not pass validation, the service was not called.
    Invalid(ErrorMap),
    /// The service was called and failed.
    Failed(SubmissionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// What the caller must do after [`SubmissionController::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// A submission is already pending, nothing happened.
    Ignored,
    /// The form has errors, the controller stays in editing.
    Invalid(ErrorMap),
    /// The controller is now submitting. The request must be sent to the
    /// registration service and its result passed to
    /// [`SubmissionController::complete`].
    Dispatch(RegistrationRequest),
}

/// Sequences validation and the registration call, with at most one call in
/// flight.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    rules: ValidationRules,
}

impl SubmissionController {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            state: SubmissionState::Editing,
            rules,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn begin(&mut self, form: &FormSnapshot) -> Submit {
        if self.is_submitting() {
            log::warn!("A registration is already pending, ignoring submit request");
            return Submit::Ignored;
        }

        let errors = validate_with(form, &self.rules);
        if !errors.is_empty() {
            return Submit::Invalid(errors);
        }

        self.state = SubmissionState::Submitting;
        log::info!("Submitting registration for '{}'", form.username);
        Submit::Dispatch(RegistrationRequest::from(form))
    }

    /// Report the result of the registration call. Returns `None` if no
    /// submission was pending.
    pub fn complete(&mut self, result: Result<(), SubmissionError>) -> Option<Outcome> {
        if !self.is_submitting() {
            log::warn!("Registration result received while no submission was pending");
            return None;
        }
        self.state = SubmissionState::Editing;

        Some(match result {
            Ok(()) => {
                log::info!("Registration succeeded");
                Outcome::Accepted
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                Outcome::Rejected(Rejection::Failed(e))
            }
        })
    }

    /// Validate the form and, if it is valid, register it with the given
    /// service. Returns `None` when a submission was already pending.
    pub async fn submit(
        &mut self,
        form: &FormSnapshot,
        service: &dyn RegistrationService,
    ) -> Option<Outcome> {
        match self.begin(form) {
            Submit::Ignored => None,
            Submit::Invalid(errors) => Some(Outcome::Rejected(Rejection::Invalid(errors))),
            Submit::Dispatch(request) => {
                let result = service.register(request).await;
                self.complete(result)
            }
        }
    }
}
