//! Insert-table dialog.

use iced::widget::{Column, Space, column, row, text, text_input};
use iced::{Alignment, Element, Length, Padding};

use scribe_core::{Catalog, CloseHandle, InsertTable, TableDimensions};

use crate::theme::Palette;
use crate::widgets::{ButtonVariant, styled_button};

#[derive(Debug, Clone)]
pub enum TableMessage {
    RowsChanged(String),
    ColumnsChanged(String),
    Confirm,
    Cancel,
}

/// Collects row and column counts, then asks the host to insert a table.
#[derive(Debug)]
pub struct TableDialog {
    rows: String,
    columns: String,
    close: CloseHandle,
}

impl TableDialog {
    pub fn new(defaults: TableDimensions, close: CloseHandle) -> Self {
        Self {
            rows: defaults.rows().to_string(),
            columns: defaults.columns().to_string(),
            close,
        }
    }

    /// The dimensions the current input would insert.
    pub fn dimensions(&self) -> TableDimensions {
        TableDimensions::from_inputs(&self.rows, &self.columns)
    }

    pub fn update(&mut self, message: TableMessage, host: &mut impl InsertTable) {
        match message {
            TableMessage::RowsChanged(value) => self.rows = value,
            TableMessage::ColumnsChanged(value) => self.columns = value,
            TableMessage::Confirm => {
                host.insert_table(self.dimensions());
                self.close.close();
            }
            TableMessage::Cancel => self.close.close(),
        }
    }

    pub fn view<'a>(&self, catalog: &Catalog, palette: Palette) -> Element<'a, TableMessage> {
        column![
            row![
                field(catalog.get("table.rows"), &self.rows, TableMessage::RowsChanged, palette),
                Space::with_width(16),
                field(catalog.get("table.columns"), &self.columns, TableMessage::ColumnsChanged, palette),
            ],
            Space::with_height(8),
            text(self.dimensions().to_string())
                .size(11)
                .color(palette.text_muted.to_iced()),
            Space::with_height(16),
            row![
                styled_button(catalog.get("dialog.cancel"), ButtonVariant::Secondary, palette)
                    .on_press(TableMessage::Cancel),
                Space::with_width(12),
                styled_button(catalog.get("dialog.confirm"), ButtonVariant::Primary, palette)
                    .on_press(TableMessage::Confirm),
            ]
            .align_y(Alignment::Center),
        ]
        .into()
    }
}

fn field<'a>(
    label: &str,
    value: &str,
    on_input: fn(String) -> TableMessage,
    palette: Palette,
) -> Column<'a, TableMessage> {
    column![
        text(label.to_string()).size(12).color(palette.text_secondary.to_iced()),
        Space::with_height(4),
        text_input("1-10", value)
            .on_input(on_input)
            .on_submit(TableMessage::Confirm)
            .padding(Padding::from([8, 12]))
            .size(13)
            .width(Length::Fixed(120.0)),
    ]
}
