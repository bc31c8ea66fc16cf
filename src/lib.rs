pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod leads;
pub mod logging;
pub mod metrics;
pub mod pricing;
pub mod server;
pub mod signals;
pub mod site;

pub use logging::init_tracing;
