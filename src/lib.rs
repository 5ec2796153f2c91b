//! Terminal client for package-registry search.
//!
//! A submitted term flows through [`dispatcher`] as search signals, the
//! [`ui::store::Store`] reduces them into a [`ui::search::SearchState`], and
//! the terminal UI renders that state.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod registry;
pub mod ui;
