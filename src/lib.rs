pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod global;
pub mod session;
pub mod summary;
