// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod markdown;
pub mod status_indicator;
pub mod ui;
