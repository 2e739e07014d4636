use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x88 as f32 / 255.0,
    0xE5 as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0x66 as f32 / 255.0,
);
pub const ORANGE: Color = Color::from_rgb(
    0xF7 as f32 / 255.0,
    0x93 as f32 / 255.0,
    0x1A as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4B as f32 / 255.0,
    0x4B as f32 / 255.0,
);
/// Backdrop behind modals.
pub const OVERLAY: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.8,
};
