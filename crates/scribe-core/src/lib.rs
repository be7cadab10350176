//! # Scribe Core
//!
//! Toolkit-independent logic for the editor plugin layer.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    toolbar / menu action                  │
//! │        │                                  │               │
//! │  ┌─────┴──────────┐              ┌────────┴──────────┐    │
//! │  │ selected_node  │              │  ModalController  │    │
//! │  │ (selection.rs) │              │    (modal.rs)     │    │
//! │  └─────┬──────────┘              └────────┬──────────┘    │
//! │        │ host SelectionModel              │ CloseHandle   │
//! │  ┌─────┴──────────────────────────────────┴───────────┐  │
//! │  │ actions.rs: InsertTable / ApplyLink  url.rs: sanitize│  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The host editor owns the document; this crate only reads its selection
//! and hands effects back through the traits in [`actions`].

pub mod actions;
pub mod config;
pub mod i18n;
pub mod modal;
pub mod selection;
pub mod url;

pub use actions::{ApplyLink, InsertTable, TableDimensions};
pub use config::Config;
pub use i18n::Catalog;
pub use modal::{ActiveModal, CloseHandle, ModalController, ModalStatus};
pub use selection::{DocumentNode, Point, SelectionModel, selected_node};
pub use crate::url::sanitize_url;
