//! Dialogs shown through the modal controller.

pub mod link;
pub mod table;

use iced::Element;

use scribe_core::{ApplyLink, Catalog, InsertTable};

pub use link::{LinkDialog, LinkMessage};
pub use table::{TableDialog, TableMessage};

use crate::host::NodeId;
use crate::theme::Palette;

/// Content of the modal slot.
#[derive(Debug)]
pub enum Dialog {
    InsertTable(TableDialog),
    InsertLink(LinkDialog<NodeId>),
}

#[derive(Debug, Clone)]
pub enum DialogMessage {
    Table(TableMessage),
    Link(LinkMessage),
}

impl Dialog {
    pub fn update<H>(&mut self, message: DialogMessage, host: &mut H)
    where
        H: InsertTable + ApplyLink<Key = NodeId>,
    {
        match (self, message) {
            (Dialog::InsertTable(dialog), DialogMessage::Table(message)) => {
                dialog.update(message, host)
            }
            (Dialog::InsertLink(dialog), DialogMessage::Link(message)) => {
                dialog.update(message, host)
            }
            (_, message) => {
                tracing::trace!(?message, "Dropped message for a dialog that is no longer shown");
            }
        }
    }

    pub fn view<'a>(&self, catalog: &Catalog, palette: Palette) -> Element<'a, DialogMessage> {
        match self {
            Dialog::InsertTable(dialog) => dialog.view(catalog, palette).map(DialogMessage::Table),
            Dialog::InsertLink(dialog) => dialog.view(catalog, palette).map(DialogMessage::Link),
        }
    }
}
