//! Insert-link dialog.
//!
//! The link target is fixed when the dialog opens, so moving the selection
//! behind the dialog cannot redirect the link.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Alignment, Element, Padding};

use scribe_core::{ApplyLink, Catalog, CloseHandle, sanitize_url};

use crate::theme::Palette;
use crate::widgets::{ButtonVariant, styled_button};

#[derive(Debug, Clone)]
pub enum LinkMessage {
    UrlChanged(String),
    Confirm,
    Cancel,
}

#[derive(Debug)]
pub struct LinkDialog<K> {
    target: K,
    target_label: String,
    url: String,
    close: CloseHandle,
}

impl<K: Clone> LinkDialog<K> {
    pub fn new(target: K, target_label: impl Into<String>, close: CloseHandle) -> Self {
        Self {
            target,
            target_label: target_label.into(),
            url: String::new(),
            close,
        }
    }

    pub fn update(&mut self, message: LinkMessage, host: &mut impl ApplyLink<Key = K>) {
        match message {
            LinkMessage::UrlChanged(value) => self.url = value,
            LinkMessage::Confirm => {
                let url = sanitize_url(self.url.trim());
                host.apply_link(self.target.clone(), &url);
                self.close.close();
            }
            LinkMessage::Cancel => self.close.close(),
        }
    }

    pub fn view<'a>(&self, catalog: &Catalog, palette: Palette) -> Element<'a, LinkMessage> {
        column![
            text(format!("{}: {}", catalog.get("link.target"), self.target_label))
                .size(12)
                .color(palette.text_secondary.to_iced()),
            Space::with_height(8),
            text(catalog.get("link.url").to_string())
                .size(12)
                .color(palette.text_secondary.to_iced()),
            Space::with_height(4),
            text_input(catalog.get("link.placeholder"), &self.url)
                .on_input(LinkMessage::UrlChanged)
                .on_submit(LinkMessage::Confirm)
                .padding(Padding::from([8, 12]))
                .size(13),
            Space::with_height(16),
            row![
                styled_button(catalog.get("dialog.cancel"), ButtonVariant::Secondary, palette)
                    .on_press(LinkMessage::Cancel),
                Space::with_width(12),
                styled_button(catalog.get("dialog.confirm"), ButtonVariant::Primary, palette)
                    .on_press(LinkMessage::Confirm),
            ]
            .align_y(Alignment::Center),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::{ModalController, ModalStatus};

    #[derive(Default)]
    struct Recorder {
        links: Vec<(u32, String)>,
    }

    impl ApplyLink for Recorder {
        type Key = u32;

        fn apply_link(&mut self, target: u32, url: &str) {
            self.links.push((target, url.to_string()));
        }
    }

    fn open(modal: &ModalController<LinkDialog<u32>>) {
        modal.show("Insert Link", |close| LinkDialog::new(7, "\"word\"", close));
    }

    #[test]
    fn test_confirm_applies_sanitized_link() {
        let modal = ModalController::new();
        let mut host = Recorder::default();
        open(&modal);

        modal.update_active(|d| d.update(LinkMessage::UrlChanged(" https://example.com ".into()), &mut host));
        modal.update_active(|d| d.update(LinkMessage::Confirm, &mut host));

        assert_eq!(host.links, vec![(7, "https://example.com".to_string())]);
        assert_eq!(modal.status(), ModalStatus::Idle);
    }

    #[test]
    fn test_unsafe_url_is_replaced() {
        let modal = ModalController::new();
        let mut host = Recorder::default();
        open(&modal);

        modal.update_active(|d| d.update(LinkMessage::UrlChanged("javascript:alert(1)".into()), &mut host));
        modal.update_active(|d| d.update(LinkMessage::Confirm, &mut host));

        assert_eq!(host.links, vec![(7, "https://".to_string())]);
    }

    #[test]
    fn test_cancel_leaves_host_untouched() {
        let modal = ModalController::new();
        let mut host = Recorder::default();
        open(&modal);

        modal.update_active(|d| d.update(LinkMessage::UrlChanged("https://example.com".into()), &mut host));
        modal.update_active(|d| d.update(LinkMessage::Cancel, &mut host));
        assert!(host.links.is_empty());
        assert!(!modal.is_showing());
    }
}
