//! Renders the modal controller's slot as an overlay.
//!
//! The overlay is stacked above the base view: a full-viewport dimmed
//! backdrop that dismisses on click, then a centered panel with the title,
//! a dismiss button and the dialog body. Backdrop and panel are siblings so
//! clicks inside the panel never reach the backdrop.

use iced::widget::{Space, button, column, container, horizontal_space, mouse_area, row, stack, text};
use iced::{Alignment, Background, Border, Element, Length};

use scribe_core::ModalController;

use crate::theme::Palette;

/// Wraps `base` with the active dialog, or returns it untouched when idle.
///
/// `on_dismiss` is emitted by the backdrop and the header's dismiss button;
/// the owner should answer it with [`ModalController::dismiss`].
pub fn overlay<'a, C, Message>(
    controller: &ModalController<C>,
    base: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
    palette: Palette,
    body: impl FnOnce(&C) -> Element<'a, Message>,
) -> Element<'a, Message>
where
    C: 'static,
    Message: Clone + 'a,
{
    let base = base.into();
    let shown = controller.with_active(|active| {
        panel(active.title, body(active.content), on_dismiss.clone(), palette)
    });

    match shown {
        Some(panel) => stack![
            base,
            mouse_area(
                container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(move |_| container::Style {
                        background: Some(Background::Color(palette.backdrop.to_iced())),
                        ..Default::default()
                    })
            )
            .on_press(on_dismiss),
            container(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ]
        .into(),
        None => base,
    }
}

fn panel<'a, Message: Clone + 'a>(
    title: &str,
    body: Element<'a, Message>,
    on_dismiss: Message,
    palette: Palette,
) -> Element<'a, Message> {
    let dismiss = button(text("×").size(16).color(palette.text_secondary.to_iced()))
        .padding([2, 8])
        .style(move |_: &iced::Theme, status: button::Status| button::Style {
            background: match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(Background::Color(palette.hover.to_iced()))
                }
                _ => None,
            },
            text_color: palette.text.to_iced(),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .on_press(on_dismiss);

    let content = column![
        row![
            text(title.to_string()).size(16).color(palette.text.to_iced()),
            horizontal_space(),
            dismiss,
        ]
        .align_y(Alignment::Center),
        Space::with_height(12),
        body,
    ]
    .padding(24)
    .width(Length::Fixed(380.0));

    container(content)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.panel.to_iced())),
            border: Border {
                color: palette.border.to_iced(),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
