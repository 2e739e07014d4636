pub mod button;
pub mod form;
pub mod modal;
pub mod text;

use iced::Length;

use crate::{color, widget::*};

/// A one line high colored strip, used to surface form level messages.
pub fn banner<'a, T: 'a>(message: &str, background: iced::Color) -> Container<'a, T> {
    Container::new(text::p2_regular(message).color(color::BLACK))
        .padding(10)
        .width(Length::Fill)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
}
