use crate::adapters::html::Document;
use crate::domain::model::Price;
use crate::domain::ports::PriceSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const PRICE_TABLE_ID: &str = "full-prices";
const UNGRADED_LABEL: &str = "Ungraded";

/// Price lookup backed by the PriceCharting search page.
pub struct PriceChartingSource {
    base_url: String,
    client: Client,
}

impl PriceChartingSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            // Search results redirect to the product page; reqwest follows
            // redirects by default.
            client: Client::new(),
        }
    }

    async fn fetch_price(&self, query: &str) -> Result<Price> {
        tracing::info!("Fetching price for: {}", query);
        let url = format!("{}/search-products", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("type", "prices")])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Pricing site returned HTTP {}", response.status());
            return Ok(Price::Unavailable);
        }

        let body = response.text().await?;
        Ok(extract_ungraded(&body))
    }
}

#[async_trait]
impl PriceSource for PriceChartingSource {
    async fn ungraded_price(&self, query: &str) -> Price {
        match self.fetch_price(query).await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!("Price lookup failed for {}: {}", query, e);
                Price::Unavailable
            }
        }
    }
}

/// Scans the `full-prices` table for the first row labelled "Ungraded" and
/// returns its value cell. Absence of the table means the site has no
/// pricing data for the query.
pub fn extract_ungraded(html: &str) -> Price {
    let doc = Document::parse(html);
    let table = match doc.by_id(PRICE_TABLE_ID) {
        Some(table) => table,
        None => return Price::Unavailable,
    };

    for row in table.select_all("tr") {
        let cells = row.select_all("td");
        if cells.len() >= 2 && cells[0].text().contains(UNGRADED_LABEL) {
            return Price::Listed(cells[1].text().trim().to_string());
        }
    }

    Price::Unavailable
}
