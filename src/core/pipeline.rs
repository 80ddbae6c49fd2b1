use crate::core::classify::classify_message;
use crate::core::{catalog::TcgRepublicCatalog, pricing::PriceChartingSource};
use crate::domain::model::{BatchResult, Price, RefShape, Resolution, SENTINEL};
use crate::domain::ports::{CatalogSource, ConfigProvider, Pacer, PriceSource};
use async_trait::async_trait;
use std::time::Duration;

/// Production pacer: a fixed pause after every line that issued a price
/// lookup, to stay under the pricing site's anti-scraping radar.
pub struct FixedPacer {
    pause: Duration,
}

impl FixedPacer {
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

#[async_trait]
impl Pacer for FixedPacer {
    async fn pace(&self) {
        tokio::time::sleep(self.pause).await;
    }
}

/// Pacer for tests: no waiting, so batch behavior stays deterministic.
pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn pace(&self) {}
}

/// Orchestrates classifier, catalog resolver and price lookup over one
/// message, one line at a time, in input order.
pub struct BatchPipeline<C, P, G> {
    catalog: C,
    pricing: P,
    pacer: G,
}

impl<C, P, G> BatchPipeline<C, P, G>
where
    C: CatalogSource,
    P: PriceSource,
    G: Pacer,
{
    pub fn new(catalog: C, pricing: P, pacer: G) -> Self {
        Self {
            catalog,
            pricing,
            pacer,
        }
    }

    /// Runs one batch. Every non-empty input line yields exactly one entry
    /// in each output list; a failed line becomes a sentinel pair and never
    /// aborts the rest of the batch.
    pub async fn run(&self, text: &str) -> BatchResult {
        let references = classify_message(text);
        tracing::debug!("Classified {} card reference(s)", references.len());

        let mut names = Vec::with_capacity(references.len());
        let mut prices = Vec::with_capacity(references.len());

        for reference in references {
            let (name, query) = match reference.shape {
                RefShape::Explicit { name, query } => (name, query),
                RefShape::SeriesSerial { series, serial } => {
                    match self.catalog.resolve(&series, &serial).await {
                        Resolution::Found { name, query } => (name, query),
                        Resolution::NotFound => {
                            // No listing, so the price lookup is skipped
                            // outright. Note the catalog fetch itself was a
                            // network call yet does not trigger the pacer;
                            // successful lines pace only after their price
                            // lookup.
                            names.push(SENTINEL.to_string());
                            prices.push(SENTINEL.to_string());
                            continue;
                        }
                    }
                }
                RefShape::Invalid => {
                    tracing::warn!("Unrecognized card reference: {}", reference.raw);
                    names.push(SENTINEL.to_string());
                    prices.push(SENTINEL.to_string());
                    continue;
                }
            };

            names.push(name);
            let price = self.pricing.ungraded_price(&query).await;
            if matches!(price, Price::Unavailable) {
                tracing::warn!("No price found for: {}", query);
            }
            prices.push(price.into_rendered());

            self.pacer.pace().await;
        }

        BatchResult { names, prices }
    }
}

/// Wires the production sources and pacer from a configuration value.
pub fn from_config(
    config: &impl ConfigProvider,
) -> BatchPipeline<TcgRepublicCatalog, PriceChartingSource, FixedPacer> {
    BatchPipeline::new(
        TcgRepublicCatalog::new(config.catalog_base_url()),
        PriceChartingSource::new(config.pricing_base_url()),
        FixedPacer::from_millis(config.pause_ms()),
    )
}
