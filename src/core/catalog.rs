use crate::adapters::html::Document;
use crate::domain::model::Resolution;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

// The catalog rejects requests with default client identifiers.
const USER_AGENT: &str = "Mozilla/5.0";
const THUMBNAIL_SELECTOR: &str = ".product_thumbnail_image img";

/// Catalog resolver backed by the TCGRepublic text-search page.
pub struct TcgRepublicCatalog {
    base_url: String,
    client: Client,
}

impl TcgRepublicCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    async fn fetch_listing(&self, series: &str, serial: &str) -> Result<Resolution> {
        // The site's query parser wants a literal tab between series and
        // serial, so the URL is assembled by hand; a query builder would
        // re-encode the %09.
        let url = format!(
            "{}/product/text_search.html?q={}%09{}",
            self.base_url,
            series,
            pad_serial(serial)
        );
        tracing::info!("Fetching card name from: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Catalog returned HTTP {}", response.status());
            return Ok(Resolution::NotFound);
        }

        let body = response.text().await?;
        Ok(extract_listing(&body))
    }
}

#[async_trait]
impl CatalogSource for TcgRepublicCatalog {
    async fn resolve(&self, series: &str, serial: &str) -> Resolution {
        match self.fetch_listing(series, serial).await {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::warn!("Catalog lookup failed for {} {}: {}", series, serial, e);
                Resolution::NotFound
            }
        }
    }
}

/// Left-pads a serial to width 3 for the catalog query; serials already
/// three or more characters long pass through unchanged.
pub fn pad_serial(serial: &str) -> String {
    format!("{:0>3}", serial)
}

/// Pulls the canonical name and price query out of a catalog search page.
/// Exactly one thumbnail must match; zero means no listing, more than one
/// means the search was ambiguous, and both are a miss.
pub fn extract_listing(html: &str) -> Resolution {
    let doc = Document::parse(html);
    let thumbnails = doc.select_all(THUMBNAIL_SELECTOR);
    if thumbnails.len() != 1 {
        tracing::warn!("Expected 1 thumbnail image, got {}", thumbnails.len());
        return Resolution::NotFound;
    }

    let alt = thumbnails[0].attr("alt").unwrap_or("").trim();
    if alt.is_empty() {
        return Resolution::NotFound;
    }

    // Alt text shape: "<Name> <Number>/<TotalInSet> <suffix...>". Keep the
    // part before the first slash, then peel the set number off the end.
    let name_part = alt.split('/').next().unwrap_or("").trim();
    let mut tokens: Vec<&str> = name_part.split_whitespace().collect();
    let number: u32 = match tokens.pop().map(str::parse) {
        Some(Ok(n)) => n,
        _ => return Resolution::NotFound,
    };

    let name = tokens.join(" ");
    let query = format!("{} #{}", name, number);
    Resolution::Found { name, query }
}
