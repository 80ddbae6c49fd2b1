use crate::domain::model::{Price, Resolution};
use async_trait::async_trait;

/// Resolves a series/serial pair into a canonical name and price query.
/// Implementations swallow their own transport and extraction failures and
/// report them as `Resolution::NotFound`; they never error out of a batch.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn resolve(&self, series: &str, serial: &str) -> Resolution;
}

/// Looks up the "Ungraded" market price for a query string. Same failure
/// contract as `CatalogSource`: every failure is `Price::Unavailable`.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn ungraded_price(&self, query: &str) -> Price;
}

/// Gate between outbound request rounds. The production implementation
/// sleeps a fixed interval; tests inject a no-op.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pace(&self);
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_base_url(&self) -> &str;
    fn pricing_base_url(&self) -> &str;
    fn pause_ms(&self) -> u64;
}
