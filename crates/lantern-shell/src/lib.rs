//! Lantern - Browser Chrome Library
//!
//! The UI shell around web content: tabs, location bar, autocomplete
//! assistant, sidebar tab strip. Built with Iced using the Elm architecture
//! (State, Message, Update, View) on top of the generic containers in
//! `lantern-core`.

pub mod app;
pub mod assist;
pub mod error;
pub mod message;
pub mod runtime;
pub mod service;
pub mod state;
pub mod theme;
pub mod url_util;
pub mod view;
