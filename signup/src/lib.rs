//! Registration form engine.
//!
//! Turns the values of a registration form into per-field errors, rates the
//! password, and sequences the submission of a valid form to a registration
//! service with at most one submission in flight.
//!
//! [`login`] only holds the sign-in form check. No front-end of this
//! workspace shows a sign-in screen, it is there for library users.

pub mod config;
pub mod form;
pub mod http;
pub mod login;
pub mod service;
pub mod session;
pub mod strength;
pub mod submission;
pub mod terms;
pub mod validation;

pub use form::{Field, FieldEdit, FormSnapshot};
pub use service::{RegistrationRequest, RegistrationService, SubmissionError};
pub use session::RegistrationSession;
pub use strength::StrengthLevel;
pub use submission::{Outcome, Rejection, Submit, SubmissionController, SubmissionState};
pub use validation::{validate, ErrorMap};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
