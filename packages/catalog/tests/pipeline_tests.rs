//! Fetch pipeline tests against a canned listing page.

use catalog::{
    records_from_table, scrape_catalog, CatalogSnapshot, MockFetcher, ScrapeError, Table,
};
use chrono::Utc;

const SOURCE_URL: &str = "http://books.test/index.html";
const LISTING: &str = include_str!("fixtures/books_index.html");

#[tokio::test]
async fn scrape_returns_cards_in_document_order() {
    let fetcher = MockFetcher::new().with_page(SOURCE_URL, LISTING);

    let records = scrape_catalog(&fetcher, SOURCE_URL).await.unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "A Light in the Attic",
            "Tipping the Velvet",
            "Soumission",
            "Sharp Objects",
            "Sapiens: A Brief History of Humankind",
        ]
    );
    assert_eq!(fetcher.calls(), vec![SOURCE_URL.to_string()]);
}

#[tokio::test]
async fn scrape_normalizes_prices_and_keeps_availability() {
    let fetcher = MockFetcher::new().with_page(SOURCE_URL, LISTING);

    let records = scrape_catalog(&fetcher, SOURCE_URL).await.unwrap();

    assert_eq!(records[0].price, 51.77);
    assert_eq!(records[0].availability, "In stock");
    assert_eq!(records[2].price, 50.10);
}

#[tokio::test]
async fn upstream_error_status_is_surfaced() {
    let fetcher = MockFetcher::new().with_status(SOURCE_URL, 503);

    let err = scrape_catalog(&fetcher, SOURCE_URL).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Status { status: 503, .. }));
}

#[tokio::test]
async fn card_without_price_fails_normalization() {
    let markup = r#"<article class="product_pod">
        <h3><a title="Priceless">Priceless</a></h3>
        <p class="instock availability">In stock</p>
    </article>"#;
    let fetcher = MockFetcher::new().with_page(SOURCE_URL, markup);

    let err = scrape_catalog(&fetcher, SOURCE_URL).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Normalize(_)));
}

#[tokio::test]
async fn exported_csv_reparses_to_same_records() {
    let fetcher = MockFetcher::new().with_page(SOURCE_URL, LISTING);
    let records = scrape_catalog(&fetcher, SOURCE_URL).await.unwrap();
    let snapshot = CatalogSnapshot::new(records.clone(), 1, Utc::now());

    let csv = snapshot.to_table().to_csv();
    let reparsed = records_from_table(&Table::from_csv(&csv).unwrap()).unwrap();

    assert!(csv.starts_with("title,price,availability\n"));
    assert_eq!(reparsed, records);
}
