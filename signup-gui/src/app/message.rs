use signup::{FieldEdit, SubmissionError};

/// All application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    Edit(FieldEdit),
    TogglePasswordVisibility,

    // Terms of use
    TermsToggled(bool),
    OpenTerms,
    CloseTerms,

    // Submission
    Submit,
    Registered(Result<(), SubmissionError>),
    DismissSuccess,
}
