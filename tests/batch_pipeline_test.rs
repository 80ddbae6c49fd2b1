use card_pricer::{
    BatchPipeline, NoopPacer, PriceChartingSource, TcgRepublicCatalog,
};
use httpmock::prelude::*;

fn listing_page(alt: &str) -> String {
    format!(
        r#"<html><body>
            <div class="product_thumbnail_image"><img src="card.jpg" alt="{}"></div>
        </body></html>"#,
        alt
    )
}

fn price_page(ungraded: &str) -> String {
    format!(
        r#"<html><body>
            <div id="full-prices"><table>
                <tr><td>Grade 7</td><td>$9.99</td></tr>
                <tr><td>Ungraded</td><td>{}</td></tr>
                <tr><td>PSA 10</td><td>$199.00</td></tr>
            </table></div>
        </body></html>"#,
        ungraded
    )
}

fn pipeline_against(
    server: &MockServer,
) -> BatchPipeline<TcgRepublicCatalog, PriceChartingSource, NoopPacer> {
    BatchPipeline::new(
        TcgRepublicCatalog::new(server.base_url()),
        PriceChartingSource::new(server.base_url()),
        NoopPacer,
    )
}

#[tokio::test]
async fn end_to_end_mixed_batch_over_http() {
    let server = MockServer::start();

    let catalog_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/product/text_search.html")
            .query_param("q", "sv1\t007")
            .header("user-agent", "Mozilla/5.0");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(listing_page("Spiritomb 076/071 AR Foil"));
    });

    let spiritomb_price = server.mock(|when, then| {
        when.method(GET)
            .path("/search-products")
            .query_param("q", "Spiritomb #76")
            .query_param("type", "prices");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(price_page("$12.34"));
    });

    let blaziken_price = server.mock(|when, then| {
        when.method(GET)
            .path("/search-products")
            .query_param("q", "Blaziken V #18")
            .query_param("type", "prices");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(price_page("$45.00"));
    });

    let pipeline = pipeline_against(&server);
    let result = pipeline
        .run("sv1 7, Blaziken V #18\nthis line makes no sense")
        .await;

    catalog_mock.assert();
    spiritomb_price.assert();
    blaziken_price.assert();

    assert_eq!(result.names, vec!["Spiritomb", "Blaziken V", "-"]);
    assert_eq!(result.prices, vec!["$12.34", "$45.00", "-"]);
    assert_eq!(
        result.render(),
        "Spiritomb\nBlaziken V\n-\n$12.34\n$45.00\n-"
    );
}

#[tokio::test]
async fn catalog_miss_skips_the_price_lookup_entirely() {
    let server = MockServer::start();

    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/product/text_search.html");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html><body>No results.</body></html>");
    });

    let pricing_mock = server.mock(|when, then| {
        when.method(GET).path("/search-products");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(price_page("$1.00"));
    });

    let pipeline = pipeline_against(&server);
    let result = pipeline.run("zz9 999").await;

    catalog_mock.assert();
    pricing_mock.assert_hits(0);

    assert_eq!(result.names, vec!["-"]);
    assert_eq!(result.prices, vec!["-"]);
}

#[tokio::test]
async fn failed_line_keeps_its_position_between_successes() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/search-products")
            .query_param("q", "Pikachu #25");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(price_page("$3.21"));
    });

    server.mock(|when, then| {
        when.method(GET)
            .path("/search-products")
            .query_param("q", "Mewtwo #150");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(price_page("$8.88"));
    });

    let pipeline = pipeline_against(&server);
    let result = pipeline
        .run("Pikachu #25\nutter nonsense here\nMewtwo #150")
        .await;

    assert_eq!(result.names, vec!["Pikachu", "-", "Mewtwo"]);
    assert_eq!(result.prices, vec!["$3.21", "-", "$8.88"]);
}

#[tokio::test]
async fn identical_responses_give_identical_batches() {
    let server = MockServer::start();

    let catalog_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/product/text_search.html")
            .query_param("q", "sv1\t007");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(listing_page("Spiritomb 076/071 AR Foil"));
    });

    let pricing_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search-products")
            .query_param("q", "Spiritomb #76");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(price_page("$12.34"));
    });

    let pipeline = pipeline_against(&server);
    let first = pipeline.run("sv1 7").await;
    let second = pipeline.run("sv1 7").await;

    assert_eq!(first, second);
    catalog_mock.assert_hits(2);
    pricing_mock.assert_hits(2);
}

#[tokio::test]
async fn output_length_matches_non_empty_input_lines() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/search-products");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/product/text_search.html");
        then.status(404);
    });

    let pipeline = pipeline_against(&server);
    let result = pipeline
        .run(" a b ,, Some Card #1 \n\nword\n , c d,")
        .await;

    // Non-empty segments: "a b", "Some Card #1", "word", "c d".
    assert_eq!(result.names.len(), 4);
    assert_eq!(result.prices.len(), 4);
}
