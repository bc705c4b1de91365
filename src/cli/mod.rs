pub mod app;
pub mod command;
