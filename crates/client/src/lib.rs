//! Client view for the project catalog.
//!
//! Talks to the catalog REST API and keeps a rendered view (grid of project
//! cards or a single project's details) in sync with server state. The
//! screen is chosen from the URL fragment; mutations go through modal
//! state machines and explicit confirmation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod forms;
pub mod grid;
pub mod messages;
pub mod modal;
pub mod render;
pub mod route;
pub mod upload;
pub mod view;
