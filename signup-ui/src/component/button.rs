use super::text::{p1_bold, text};
use crate::widget::*;
use iced::widget::{button, container};
use iced::Length;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(p1_bold(t))
            .center_x(Length::Fill)
            .padding(5),
    )
    .style(button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).center_x(Length::Fill).padding(5)).style(button::secondary)
}

/// A button that looks like a link, for inline actions in a sentence.
pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(text(t).color(crate::color::BLUE))
        .padding(0)
        .style(button::text)
}

pub fn transparent<'a, T: 'a>(t: String) -> Button<'a, T> {
    Button::new(text(t)).style(button::text)
}
