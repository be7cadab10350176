//! Shared widgets.

use iced::widget::{Button, button, text};
use iced::{Background, Border, Padding};

use crate::theme::Palette;

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Confirming action
    Primary,
    /// Neutral action such as cancel
    Secondary,
    /// Destructive action
    Danger,
}

/// A text button styled from the palette, with a hover state.
pub fn styled_button<'a, Message: Clone + 'a>(
    label: impl Into<String>,
    variant: ButtonVariant,
    palette: Palette,
) -> Button<'a, Message> {
    let (idle, hover, fg, border) = match variant {
        ButtonVariant::Primary => (palette.accent, palette.accent_hover, palette.on_accent, None),
        ButtonVariant::Secondary => (palette.surface, palette.hover, palette.text, Some(palette.border)),
        ButtonVariant::Danger => (palette.danger, palette.danger_hover, palette.on_accent, None),
    };

    button(text(label.into()).size(13).color(fg.to_iced()))
        .padding(Padding::from([8, 20]))
        .style(move |_: &iced::Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                _ => idle,
            };
            button::Style {
                background: Some(Background::Color(bg.to_iced())),
                text_color: fg.to_iced(),
                border: Border {
                    color: border.map(|c| c.to_iced()).unwrap_or(iced::Color::TRANSPARENT),
                    width: if border.is_some() { 1.0 } else { 0.0 },
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
}
