pub mod terms;

use iced::{
    widget::{checkbox, Space},
    Alignment, Length,
};

use signup::{Field, FieldEdit, StrengthLevel};
use signup_ui::{
    color,
    component::{banner, button, form, modal::modal, text},
    widget::*,
};

use super::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let content = Container::new(Scrollable::new(
        Container::new(registration_form(app))
            .padding(40)
            .center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    if app.session.terms().is_disclosure_open() {
        modal(content, terms::terms_modal(&app.terms), Message::CloseTerms)
    } else {
        content.into()
    }
}

fn strength_color(strength: StrengthLevel) -> iced::Color {
    match strength {
        StrengthLevel::Strong => color::GREEN,
        StrengthLevel::Medium => color::ORANGE,
        StrengthLevel::Weak | StrengthLevel::None => color::RED,
    }
}

fn registration_form(app: &App) -> Column<'_, Message> {
    let snapshot = app.session.snapshot();
    let value = |field: Field| {
        form::Value::new(
            snapshot.text(field).unwrap_or_default(),
            app.session.error(field),
        )
    };

    let username = form::Form::new("Username", &value(Field::Username), |v| {
        Message::Edit(FieldEdit::Username(v))
    })
    .size(16)
    .padding(15);

    let full_name = form::Form::new("Full name", &value(Field::FullName), |v| {
        Message::Edit(FieldEdit::FullName(v))
    })
    .size(16)
    .padding(15);

    let email = form::Form::new("example@domain.com", &value(Field::Email), |v| {
        Message::Edit(FieldEdit::Email(v))
    })
    .size(16)
    .padding(15);

    let password = Row::new()
        .push(
            Container::new(
                form::Form::new(
                    "Password (at least 6 characters)",
                    &value(Field::Password),
                    |v| Message::Edit(FieldEdit::Password(v)),
                )
                .size(16)
                .padding(15)
                .secure(!app.password_visible),
            )
            .width(Length::Fill),
        )
        .push(
            button::transparent(if app.password_visible { "Hide" } else { "Show" }.to_string())
                .on_press(Message::TogglePasswordVisibility),
        )
        .spacing(10)
        .align_y(Alignment::Start);

    let strength = (app.session.strength() != StrengthLevel::None).then(|| {
        text::p2_regular(format!("Password strength: {}", app.session.strength()))
            .color(strength_color(app.session.strength()))
    });

    let confirm = form::Form::new(
        "Confirm password",
        &value(Field::ConfirmPassword),
        |v| Message::Edit(FieldEdit::ConfirmPassword(v)),
    )
    .size(16)
    .padding(15)
    .secure(!app.password_visible);

    let terms = Row::new()
        .push(checkbox("", app.session.terms().accepted()).on_toggle(Message::TermsToggled))
        .push(text::p2_regular("I accept the ").color(color::GREY_3))
        .push(button::link("Terms of Use").on_press(Message::OpenTerms))
        .align_y(Alignment::Center);

    let terms_error = app
        .session
        .error(Field::AcceptedTerms)
        .map(|e| text::caption(e).color(color::RED));

    let notice = app
        .session
        .notice()
        .map(|e| banner(&e.to_string(), color::RED));

    let success = app.registered.then(|| {
        Row::new()
            .push(banner("Registration completed successfully!", color::GREEN))
            .push(button::transparent("Dismiss".to_string()).on_press(Message::DismissSuccess))
            .align_y(Alignment::Center)
    });

    let submit = if app.session.is_submitting() {
        button::primary("Signing up...").width(Length::Fill)
    } else {
        button::primary("Sign up")
            .on_press(Message::Submit)
            .width(Length::Fill)
    };

    Column::new()
        .push(text::h2("SIGN UP"))
        .push(Space::with_height(Length::Fixed(20.0)))
        .push(username)
        .push(full_name)
        .push(email)
        .push(password)
        .push_maybe(strength)
        .push(confirm)
        .push(terms)
        .push_maybe(terms_error)
        .push_maybe(notice)
        .push_maybe(success)
        .push(Space::with_height(Length::Fixed(10.0)))
        .push(submit)
        .align_x(Alignment::Center)
        .spacing(10)
        .max_width(500)
        .width(Length::Fill)
}
