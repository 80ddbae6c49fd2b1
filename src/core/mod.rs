pub mod catalog;
pub mod classify;
pub mod pipeline;
pub mod pricing;

pub use crate::domain::model::{BatchResult, CardReference, Price, RefShape, Resolution};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Pacer, PriceSource};
pub use crate::utils::error::Result;
