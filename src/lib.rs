pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::catalog::TcgRepublicCatalog;
pub use crate::core::pipeline::{from_config, BatchPipeline, FixedPacer, NoopPacer};
pub use crate::core::pricing::PriceChartingSource;
pub use crate::domain::model::{BatchResult, CardReference, Price, RefShape, Resolution, SENTINEL};
pub use crate::utils::error::{CardError, Result};
