use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use scribe_core::selected_node;

use super::{App, Message};
use crate::host::SampleNode;
use crate::modal;
use crate::theme::Palette;
use crate::widgets::{ButtonVariant, styled_button};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.theme.palette;

        let content = column![
            self.view_toolbar(),
            row![self.view_document(), self.view_activity()]
                .spacing(16)
                .height(Length::Fill),
        ]
        .spacing(16)
        .padding(16);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.background.to_iced())),
                ..Default::default()
            });

        modal::overlay(&self.modal, base, Message::DismissModal, palette, |dialog| {
            dialog.view(&self.catalog, palette).map(Message::Dialog)
        })
    }

    fn view_toolbar(&self) -> Element<'_, Message> {
        let palette = self.theme.palette;
        row![
            styled_button(self.catalog.get("toolbar.insert_table"), ButtonVariant::Primary, palette)
                .on_press(Message::OpenInsertTable),
            styled_button(self.catalog.get("toolbar.insert_link"), ButtonVariant::Secondary, palette)
                .on_press(Message::OpenInsertLink),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }

    fn view_document(&self) -> Element<'_, Message> {
        let palette = self.theme.palette;
        let target = selected_node(&self.document.selection()).id;

        let nodes = self.document.nodes().iter().fold(Column::new().spacing(4), |col, node| {
            col.push(self.view_node(node, node.id == target, palette))
        });

        column![
            text(self.catalog.get("document.title")).size(16).color(palette.text.to_iced()),
            text(self.catalog.get("document.select_hint"))
                .size(11)
                .color(palette.text_muted.to_iced()),
            Space::with_height(8),
            scrollable(nodes).height(Length::Fill),
        ]
        .spacing(4)
        .width(Length::FillPortion(2))
        .into()
    }

    fn view_node<'a>(&self, node: &'a SampleNode, is_target: bool, palette: Palette) -> Element<'a, Message> {
        let selected = self.document.is_selected(node.id);
        let label = match &node.link {
            Some(url) => format!("{}  → {}", node.label(), url),
            None => node.label(),
        };

        let chip = button(text(label).size(13).color(palette.text.to_iced()))
            .padding(Padding::from([6, 12]))
            .width(Length::Fill)
            .style(move |_: &iced::Theme, status: button::Status| {
                let bg = match (selected, status) {
                    (true, _) => palette.accent.to_iced().scale_alpha(0.35),
                    (false, button::Status::Hovered) => palette.hover.to_iced(),
                    _ => palette.surface.to_iced(),
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: palette.text.to_iced(),
                    border: Border {
                        color: if is_target { palette.accent.to_iced() } else { palette.border.to_iced() },
                        width: if is_target { 2.0 } else { 1.0 },
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::SelectNode(node.id));

        row![
            chip,
            styled_button("⇢", ButtonVariant::Secondary, palette).on_press(Message::ExtendSelection(node.id)),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
    }

    fn view_activity(&self) -> Element<'_, Message> {
        let palette = self.theme.palette;
        let entries = self.document.activity().iter().fold(Column::new().spacing(4), |col, entry| {
            col.push(text(entry.as_str()).size(12).color(palette.text_secondary.to_iced()))
        });

        column![
            text(self.catalog.get("document.activity")).size(16).color(palette.text.to_iced()),
            Space::with_height(8),
            scrollable(entries).height(Length::Fill),
        ]
        .spacing(4)
        .width(Length::FillPortion(1))
        .into()
    }
}
