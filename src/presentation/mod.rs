// Presentation layer - Rendering, HTTP handlers and the command line
pub mod app_state;
pub mod cli;
pub mod handlers;
pub mod panel_view;
pub mod shell_view;
