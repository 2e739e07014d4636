use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("please fill in all fields")]
    MissingFields,
}

/// Values of a sign-in form. Only checked for completeness, nothing is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn check(&self) -> Result<(), LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(())
    }
}
