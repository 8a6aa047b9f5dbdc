//! Integration tests for the reference dataset pages and downloads.

mod common;

use crate::common::TestHarness;
use axum::http::{header, StatusCode};
use test_context::test_context;

const GILSON: &str = "Model,Volume Range,Price\nPIPETMAN P20,2-20 µL,$320\n\"PIPETMAN P200, Classic\",20-200 µL,$330\n";
const MICE: &str = "Name,DPI,Weight\nViper Mini,8500,61g\nG Pro X Superlight,25600,63g\n";

#[test_context(TestHarness)]
#[tokio::test]
async fn gilson_page_renders_its_file(ctx: &TestHarness) {
    ctx.write_reference("GilsonPipettes.csv", GILSON);

    let response = ctx.get("/gilson").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains(r#"class="dataframe table table-striped""#));
    assert!(html.contains("<th>Volume Range</th>"));
    assert!(html.contains("<td>PIPETMAN P200, Classic</td>"));
    assert!(html.contains("/export_gilson_csv"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn datasets_do_not_share_state(ctx: &TestHarness) {
    ctx.write_reference("GilsonPipettes.csv", GILSON);
    ctx.write_reference("GamingMouseList.csv", MICE);

    let gilson = ctx.get("/gilson").await.text();
    let mice = ctx.get("/gaming_mouse").await.text();

    assert!(gilson.contains("PIPETMAN P20"));
    assert!(!gilson.contains("Viper Mini"));
    assert!(mice.contains("Viper Mini"));
    assert!(!mice.contains("PIPETMAN"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn file_is_reread_on_every_request(ctx: &TestHarness) {
    ctx.write_reference("GamingMouseList.csv", MICE);
    assert!(!ctx.get("/gaming_mouse").await.text().contains("Basilisk"));

    ctx.write_reference("GamingMouseList.csv", &format!("{MICE}Basilisk V3,26000,101g\n"));

    assert!(ctx.get("/gaming_mouse").await.text().contains("Basilisk V3"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn export_sends_file_as_download(ctx: &TestHarness) {
    ctx.write_reference("GilsonPipettes.csv", GILSON);

    let response = ctx.get("/export_gilson_csv").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE), Some("text/csv"));
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        Some("attachment; filename=gilson_pipettes.csv")
    );
    assert_eq!(response.text(), GILSON);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn laptop_export_uses_its_download_name(ctx: &TestHarness) {
    ctx.write_reference("GamingLaptopsList.csv", "Model,GPU\nZephyrus G14,RTX 4070\n");

    let response = ctx.get("/export_laptop_csv").await;

    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        Some("attachment; filename=gaming_laptop_list.csv")
    );
    assert!(response.text().contains("Zephyrus G14"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn inch_marks_in_unquoted_cells_are_kept(ctx: &TestHarness) {
    ctx.write_reference(
        "GamingLaptopsList.csv",
        "Model,Display\nOmen 16,16.1\" FHD 165Hz\nNitro V 15,15.6\" FHD\n",
    );

    let response = ctx.get("/gaming_laptop").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<td>16.1&quot; FHD 165Hz</td>"));
    assert!(html.contains("<td>Nitro V 15</td>"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_file_is_not_found(ctx: &TestHarness) {
    let page = ctx.get("/gaming_laptop").await;
    let export = ctx.get("/export_mouse_csv").await;

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert_eq!(export.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_file_is_server_error(ctx: &TestHarness) {
    ctx.write_reference("GilsonPipettes.csv", "Model,Price\nP20,$1,extra\n");

    let response = ctx.get("/gilson").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
