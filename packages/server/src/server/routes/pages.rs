//! Informational pages with no data dependency.

use axum::response::{Html, Redirect};

use crate::server::error::AppError;
use crate::server::templates::{render_page, render_standalone};

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub route: &'static str,
    pub template: &'static str,
    pub title: &'static str,
    /// Served as-is instead of inside the shared layout
    pub standalone: bool,
}

const fn page(route: &'static str, template: &'static str, title: &'static str) -> Page {
    Page {
        route,
        template,
        title,
        standalone: false,
    }
}

pub const STATIC_PAGES: [Page; 10] = [
    Page {
        route: "/",
        template: "loading",
        title: "Loading",
        standalone: true,
    },
    page("/home", "index", "Home"),
    page("/about", "about", "About"),
    page("/codroidhub", "codroidhub", "CodroidHub"),
    page("/github", "github", "GitHub"),
    page("/blogs", "blogs", "Blogs"),
    page("/services", "services", "Services"),
    page("/web_scraping", "web_scraping", "Web Scraping"),
    page("/macromolecular", "macromolecular", "Macromolecular"),
    page(
        "/macromolecular_dashboard",
        "macromolecular_dashboard",
        "Macromolecular Dashboard",
    ),
];

pub async fn page_handler(page: Page) -> Result<Html<String>, AppError> {
    if page.standalone {
        render_standalone(page.template)
    } else {
        render_page(page.template, page.title, &[])
    }
}

/// `/projects` moved under services.
pub async fn projects_handler() -> Redirect {
    Redirect::to("/services")
}
