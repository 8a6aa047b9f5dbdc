//! Application setup and router configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::domains::reference::ReferenceDataset;
use crate::kernel::ServerDeps;
use crate::server::routes::{
    bar_chart_handler, export_csv_handler, health_handler, page_handler, pie_chart_handler,
    projects_handler, reference_export_handler, reference_page_handler, scrape_handler,
    STATIC_PAGES,
};
use crate::server::static_files::serve_static;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    let mut router = Router::new()
        .route("/scrape", get(scrape_handler))
        .route("/export_csv", get(export_csv_handler))
        .route("/bar", get(bar_chart_handler))
        .route("/pie", get(pie_chart_handler))
        .route("/projects", get(projects_handler))
        .route("/static/*path", get(serve_static))
        .route("/health", get(health_handler));

    for page in STATIC_PAGES {
        router = router.route(page.route, get(move || page_handler(page)));
    }

    // Each dataset reads its own file on every request
    for dataset in ReferenceDataset::ALL {
        router = router
            .route(
                dataset.page_route(),
                get(move |state: Extension<AppState>| reference_page_handler(state, dataset)),
            )
            .route(
                dataset.export_route(),
                get(move |state: Extension<AppState>| reference_export_handler(state, dataset)),
            );
    }

    router
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
