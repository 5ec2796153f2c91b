pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod store;
pub mod terminal_guard;
pub mod text_input;
pub mod theme;
