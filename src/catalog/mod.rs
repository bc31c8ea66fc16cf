pub mod collation;
pub mod csv;
pub mod loader;
pub mod models;
pub mod normalizer;
pub mod service;

pub use csv::{parse_csv, CsvRow};
pub use models::{fallback_materials, CatalogSnapshot, CatalogSource, Material};
pub use normalizer::{guess_multiplier, normalize_materials};
pub use service::MaterialCatalog;
