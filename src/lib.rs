pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod services;

#[cfg(test)]
pub mod testing;
