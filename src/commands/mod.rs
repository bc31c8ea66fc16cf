//! Command implementations for the CLI
//!
//! - start: Start the site backend
//! - test: Test configuration validity
//! - config: Configuration display and validation
//! - materials: Print the material catalog
//! - estimate: Price a print from the command line

pub mod config;
pub mod estimate;
pub mod materials;
pub mod start;
