use iced::Task;

use scribe_core::selected_node;

use super::{App, Message};
use crate::dialogs::{Dialog, LinkDialog, TableDialog};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectNode(id) => self.document.select(id),

            Message::ExtendSelection(id) => self.document.extend_to(id),

            Message::OpenInsertTable => {
                let defaults = self.config.table.defaults();
                self.modal.show(self.catalog.get("table.title"), |close| {
                    Dialog::InsertTable(TableDialog::new(defaults, close))
                });
            }

            Message::OpenInsertLink => {
                let target = selected_node(&self.document.selection());
                let (id, label) = (target.id, target.label());
                tracing::debug!(?id, "Link target resolved");

                self.modal.show(self.catalog.get("link.title"), |close| {
                    Dialog::InsertLink(LinkDialog::new(id, label, close))
                });
            }

            Message::DismissModal => self.modal.dismiss(),

            Message::Dialog(message) => {
                let handled = self
                    .modal
                    .update_active(|dialog| dialog.update(message, &mut self.document));
                if handled.is_none() {
                    tracing::trace!("Dialog message arrived with no dialog open");
                }
            }
        }

        Task::none()
    }
}
