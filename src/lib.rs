pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repo;
pub mod ui;
pub mod usecase;
