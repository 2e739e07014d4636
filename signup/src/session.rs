use crate::{
    form::{Field, FieldEdit, FormSnapshot},
    service::SubmissionError,
    strength::{indicator, StrengthLevel},
    submission::{Outcome, Rejection, Submit, SubmissionController, SubmissionState},
    terms::TermsGate,
    validation::{ErrorMap, ValidationRules},
};

/// State of one registration screen, from mount to unmount.
#[derive(Debug, Clone, Default)]
pub struct RegistrationSession {
    form: FormSnapshot,
    terms: TermsGate,
    controller: SubmissionController,
    strength: StrengthLevel,
    errors: ErrorMap,
    notice: Option<SubmissionError>,
}

impl RegistrationSession {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            controller: SubmissionController::new(rules),
            ..Default::default()
        }
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        if let FieldEdit::Password(password) = &edit {
            self.strength = indicator(password);
        }
        self.form = self.form.edited(edit);
    }

    pub fn toggle_terms(&mut self) {
        self.terms.toggle_acceptance();
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.terms.set_acceptance(accepted);
    }

    pub fn open_terms(&mut self) {
        self.terms.open_disclosure();
    }

    pub fn close_terms(&mut self) {
        self.terms.close_disclosure();
    }

    /// The values as they would be validated right now.
    pub fn snapshot(&self) -> FormSnapshot {
        self.form.with_accepted_terms(self.terms.accepted())
    }

    pub fn terms(&self) -> &TermsGate {
        &self.terms
    }

    pub fn strength(&self) -> StrengthLevel {
        self.strength
    }

    /// Errors of the last submit attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Form level failure of the last registration call.
    pub fn notice(&self) -> Option<&SubmissionError> {
        self.notice.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    pub fn begin_submit(&mut self) -> Submit {
        if self.controller.is_submitting() {
            return Submit::Ignored;
        }

        self.errors.clear();
        self.notice = None;
        let submit = self.controller.begin(&self.snapshot());
        if let Submit::Invalid(errors) = &submit {
            self.errors = errors.clone();
        }
        submit
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> Option<Outcome> {
        let outcome = self.controller.complete(result)?;
        if let Outcome::Rejected(Rejection::Failed(e)) = &outcome {
            self.notice = Some(e.clone());
        }
        Some(outcome)
    }
}
