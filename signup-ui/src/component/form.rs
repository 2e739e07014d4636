use iced::widget::text_input;
use iced::{Border, Length};

use crate::{color, component::text, widget::*};

/// A text value bound to an input, with its current validity.
#[derive(Debug, Clone)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<String>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    pub fn new(value: &str, warning: Option<&str>) -> Self {
        Self {
            value: value.to_string(),
            warning: warning.map(str::to_string),
            valid: warning.is_none(),
        }
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<String>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning.clone(),
            valid: value.valid,
        }
    }

    /// Hides the typed characters.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

fn invalid(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let style = text_input::default(theme, status);
    text_input::Style {
        border: Border {
            color: color::RED,
            ..style.border
        },
        ..style
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).color(color::RED))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_validity_follows_warning() {
        let value = Value::new("bad-email", Some("invalid email"));
        assert!(!value.valid);
        assert_eq!(value.warning.as_deref(), Some("invalid email"));

        let value = Value::new("joe@x.com", None);
        assert!(value.valid);
        assert!(Value::default().valid);
    }
}
