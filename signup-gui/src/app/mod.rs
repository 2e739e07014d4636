pub mod message;
pub mod view;

use std::sync::Arc;

use iced::Task;
use tracing::{info, warn};

use signup::{
    config::{Config, ConfigError},
    Outcome, RegistrationService, RegistrationSession, Rejection, Submit,
};
use signup_ui::widget::Element;

pub use message::Message;

/// Main application state
pub struct App {
    pub session: RegistrationSession,
    pub service: Arc<dyn RegistrationService>,
    pub terms: String,
    pub password_visible: bool,
    /// The last registration went through.
    pub registered: bool,
}

impl App {
    pub fn new(
        session: RegistrationSession,
        service: Arc<dyn RegistrationService>,
        terms: String,
    ) -> Self {
        Self {
            session,
            service,
            terms,
            password_visible: false,
            registered: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let terms = config
            .terms()?
            .unwrap_or_else(|| view::terms::TERMS_OF_USE.to_string());
        info!("Registrations are sent to {}", config.backend());
        Ok(Self::new(
            RegistrationSession::new(config.validation),
            config.service(),
            terms,
        ))
    }

    pub fn title(&self) -> String {
        format!("Sign up v{}", crate::VERSION)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Edit(edit) => self.session.edit(edit),
            Message::TogglePasswordVisibility => self.password_visible = !self.password_visible,
            Message::TermsToggled(accepted) => self.session.set_terms(accepted),
            Message::OpenTerms => self.session.open_terms(),
            Message::CloseTerms => self.session.close_terms(),
            Message::Submit => return self.on_submit(),
            Message::Registered(result) => self.on_registered(result),
            Message::DismissSuccess => self.registered = false,
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn on_submit(&mut self) -> Task<Message> {
        match self.session.begin_submit() {
            Submit::Ignored => Task::none(),
            Submit::Invalid(errors) => {
                info!(
                    "Registration form has errors on: {:?}",
                    errors.fields().collect::<Vec<_>>()
                );
                Task::none()
            }
            Submit::Dispatch(request) => {
                self.registered = false;
                let service = self.service.clone();
                Task::perform(
                    async move { service.register(request).await },
                    Message::Registered,
                )
            }
        }
    }

    fn on_registered(&mut self, result: Result<(), signup::SubmissionError>) {
        match self.session.finish_submit(result) {
            Some(Outcome::Accepted) => {
                info!("Registration completed");
                self.registered = true;
            }
            Some(Outcome::Rejected(Rejection::Failed(e))) => {
                warn!("Registration failed: {}", e);
            }
            Some(Outcome::Rejected(Rejection::Invalid(_))) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup::{
        service::SimulatedRegistration, validation::TERMS_REQUIRED, Field, FieldEdit,
        SubmissionError, SubmissionState,
    };

    fn app() -> App {
        App::new(
            RegistrationSession::default(),
            Arc::new(SimulatedRegistration::default()),
            String::new(),
        )
    }

    fn fill(app: &mut App) {
        for edit in [
            FieldEdit::Username("joe".to_string()),
            FieldEdit::FullName("Joe Doe".to_string()),
            FieldEdit::Email("joe@x.com".to_string()),
            FieldEdit::Password("Abc123".to_string()),
            FieldEdit::ConfirmPassword("Abc123".to_string()),
        ] {
            let _ = app.update(Message::Edit(edit));
        }
    }

    #[test]
    fn submit_invalid_form_shows_errors() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::Submit);
        assert_eq!(app.session.state(), SubmissionState::Editing);
        assert_eq!(
            app.session.error(Field::AcceptedTerms),
            Some(TERMS_REQUIRED)
        );
    }

    #[test]
    fn second_submit_is_ignored_while_pending() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::TermsToggled(true));
        let _ = app.update(Message::Submit);
        assert!(app.session.is_submitting());

        // Even after breaking the form, nothing happens until the answer.
        let _ = app.update(Message::Edit(FieldEdit::Email(String::new())));
        let _ = app.update(Message::Submit);
        assert!(app.session.is_submitting());
        assert!(app.session.errors().is_empty());

        let _ = app.update(Message::Registered(Ok(())));
        assert_eq!(app.session.state(), SubmissionState::Editing);
        assert!(app.registered);
        let _ = app.update(Message::DismissSuccess);
        assert!(!app.registered);
    }

    #[test]
    fn failed_registration_keeps_the_form() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::TermsToggled(true));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Registered(Err(SubmissionError::new("offline"))));
        assert!(!app.registered);
        assert_eq!(app.session.state(), SubmissionState::Editing);
        assert_eq!(app.session.snapshot().username, "joe");
        assert!(app.session.notice().is_some());
    }

    #[test]
    fn terms_modal() {
        let mut app = app();
        let _ = app.update(Message::OpenTerms);
        assert!(app.session.terms().is_disclosure_open());
        let _ = app.update(Message::CloseTerms);
        assert!(!app.session.terms().is_disclosure_open());
        let _ = app.update(Message::TogglePasswordVisibility);
        assert!(app.password_visible);
    }

    #[test]
    fn from_default_config() {
        let app = App::from_config(&Config::default()).unwrap();
        assert_eq!(app.terms, view::terms::TERMS_OF_USE);
        assert_eq!(app.session.state(), SubmissionState::Editing);
    }
}
