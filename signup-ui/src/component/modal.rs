use iced::widget::{center, container, mouse_area, opaque, stack};

use crate::{color, widget::*};

/// Shows `content` centered above `base`, on a dimmed backdrop. Clicking the
/// backdrop produces `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme: &Theme| {
                container::Style {
                    background: Some(color::OVERLAY.into()),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// The box a modal content is laid in.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(20)
        .max_width(550)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: iced::Border {
                    radius: 10.0.into(),
                    width: 1.0,
                    color: color::GREY_1,
                },
                ..container::Style::default()
            }
        })
}
