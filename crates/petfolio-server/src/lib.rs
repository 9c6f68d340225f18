//! Petfolio HTTP Server Library
//!
//! This module exposes the core server functionality for testing purposes.
//!
//! The main entry point is [`create_app`], which creates the configured
//! application service (routing plus URL conventions).

pub mod app;
pub mod config;
pub mod docs;
pub mod routes;

pub use app::{create_app, run, App};
pub use config::{Config, Environment};
