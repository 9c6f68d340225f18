//! Petfolio HTTP Server - Binary Entry Point
//!
//! This is the main entry point for the petfolio-server binary.
//! The core implementation is in the library crate.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    petfolio_server::run().await
}
