//! # Scribe UI
//!
//! iced front end for the editor plugin layer.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA), like the rest of iced:
//! - **Model**: [`App`] holds the host document and the modal controller
//! - **Message**: toolbar clicks, selection changes, dialog input
//! - **Update**: routes dialog input into the active dialog
//! - **View**: the document, with the active dialog stacked on top
//!
//! Dialogs close themselves through the [`scribe_core::CloseHandle`] they
//! were built with, so the app never tracks which dialog is open.

pub mod app;
pub mod dialogs;
pub mod host;
pub mod modal;
pub mod theme;
pub mod widgets;

pub use app::{App, Flags, run};
pub use theme::Theme;
