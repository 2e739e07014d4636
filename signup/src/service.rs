use std::{fmt, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::form::FormSnapshot;

/// What is sent to the registration service once the form is valid.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl From<&FormSnapshot> for RegistrationRequest {
    fn from(form: &FormSnapshot) -> Self {
        Self {
            username: form.username.clone(),
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// A failure of the registration call itself, as opposed to a form
/// validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl SubmissionError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            http_status: None,
            error: error.into(),
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "Registration error: [{}] {}", status, self.error),
            None => write!(f, "Registration error: {}", self.error),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// The external service accounts are registered against.
#[async_trait]
pub trait RegistrationService: fmt::Debug + Send + Sync {
    async fn register(&self, request: RegistrationRequest) -> Result<(), SubmissionError>;
}

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Accepts every registration after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedRegistration {
    delay: Duration,
}

impl SimulatedRegistration {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedRegistration {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl RegistrationService for SimulatedRegistration {
    async fn register(&self, request: RegistrationRequest) -> Result<(), SubmissionError> {
        log::debug!(
            "Simulating registration of '{}', answering in {:?}",
            request.username,
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
