//! # Shelf Client
//!
//! Client side of the Shelf catalog.
//!
//! - [`api`]: the [`BookApi`] capability and its HTTP implementation
//! - [`view`]: [`LibraryView`], the UI state (current page, sort controls,
//!   create/edit form, item being edited)
//! - [`render`]: plain-text rendering of the view
//! - [`command`]: the terminal front-end's command language
//!
//! Failed requests are returned as [`ClientError`] values. The view never
//! swallows them.

pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod view;

pub use api::{BookApi, HttpBookApi, DEFAULT_API_URL};
pub use command::Command;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use form::FormState;
pub use view::{Confirm, LibraryView, DELETE_PROMPT};
