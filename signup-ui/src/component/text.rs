use crate::widget::Text;
use iced::widget::text::Shaping;
use iced::{font, Font};
use std::fmt::Display;

pub const H2_SIZE: u16 = 29;
pub const H3_SIZE: u16 = 24;
pub const P1_SIZE: u16 = 16;
pub const P2_SIZE: u16 = 14;
pub const CAPTION_SIZE: u16 = 12;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn h2<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(BOLD)
        .size(H2_SIZE)
}

pub fn h3<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(BOLD)
        .size(H3_SIZE)
}

pub fn p1_bold<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(BOLD)
        .size(P1_SIZE)
}

pub fn p1_regular<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(P1_SIZE)
}

pub fn p2_regular<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(P2_SIZE)
}

pub fn caption<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(CAPTION_SIZE)
}

pub fn text<'a>(content: impl Display) -> Text<'a> {
    p1_regular(content)
}
