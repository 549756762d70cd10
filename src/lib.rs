pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod events;
pub mod interaction;
pub mod registrar;

#[cfg(test)]
mod test_support;
