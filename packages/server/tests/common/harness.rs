//! Test harness driving the full router in-process.
//!
//! Every harness gets its own static and reference directories under the
//! system temp dir and a `MockFetcher` standing in for the source site.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use catalog::MockFetcher;
use server_core::kernel::ServerDeps;
use server_core::server::build_app;
use test_context::AsyncTestContext;
use tower::ServiceExt;
use uuid::Uuid;

/// Source URL the harness scrapes.
pub const SOURCE_URL: &str = "http://books.test/index.html";

/// Listing page with five in-stock books.
pub const BOOKS_PAGE: &str = include_str!("../../../catalog/tests/fixtures/books_index.html");

/// Test harness that manages per-test directories and the router.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.get("/health").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub fetcher: MockFetcher,
    pub root: PathBuf,
    pub static_dir: PathBuf,
    pub reference_dir: PathBuf,
    pub app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}

impl TestHarness {
    /// Harness whose source page serves [`BOOKS_PAGE`].
    pub fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let root = std::env::temp_dir().join(format!("bookshelf-test-{}", Uuid::new_v4()));
        let static_dir = root.join("static");
        let reference_dir = root.join("ws_csv_files");
        std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
        std::fs::create_dir_all(&reference_dir).expect("Failed to create reference dir");

        let fetcher = MockFetcher::new().with_page(SOURCE_URL, BOOKS_PAGE);
        let deps = ServerDeps::new(
            Arc::new(fetcher.clone()),
            SOURCE_URL,
            static_dir.clone(),
            reference_dir.clone(),
        );

        Self {
            fetcher,
            root,
            static_dir,
            reference_dir,
            app: build_app(deps),
        }
    }

    /// Send a GET request through the router.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Write a reference CSV into this harness's reference directory.
    pub fn write_reference(&self, file_name: &str, contents: &str) {
        std::fs::write(self.reference_dir.join(file_name), contents)
            .expect("Failed to write reference file");
    }

    pub fn static_file(&self, name: &str) -> PathBuf {
        self.static_dir.join(name)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn location(&self) -> Option<&str> {
        self.header(header::LOCATION)
    }

    pub fn assert_redirect(&self, to: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.text());
        assert_eq!(self.location(), Some(to));
    }
}

/// Files in `dir` whose names start with a dot (in-flight chart staging files).
pub fn hidden_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .filter(|name| name.starts_with('.'))
                .collect()
        })
        .unwrap_or_default()
}
