use iced::Task;

use scribe_core::{Catalog, Config, ModalController};

use crate::dialogs::Dialog;
use crate::host::SampleDocument;
use crate::theme::Theme;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Launch options resolved by the binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: Config,
    pub catalog: Catalog,
}

pub struct App {
    pub config: Config,
    pub catalog: Catalog,
    pub theme: Theme,
    pub document: SampleDocument,
    pub modal: ModalController<Dialog>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let theme = Theme::from_config(&flags.config.ui);
        tracing::debug!(theme = %theme.name, "Initialized UI");

        let app = Self {
            config: flags.config,
            catalog: flags.catalog,
            theme,
            document: SampleDocument::new(),
            modal: ModalController::new(),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match self.modal.title() {
            Some(title) => format!("{} - Scribe", title),
            None => "Scribe".to_string(),
        }
    }

    pub fn iced_theme(&self) -> iced::Theme {
        self.theme.iced_theme()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(flags.config.ui.window_width, flags.config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .window_size(size)
        .theme(App::iced_theme)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
