//! HTML routes for the page shell.

use axum::{Router, http::StatusCode, response::Html, routing::get};
use ui::{Page, render_page};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    let mut router = Router::new();
    for page in Page::ALL {
        router = router.route(
            page.path(),
            get(move || async move { Html(render_page(page)) }),
        );
    }
    router.fallback(not_found)
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html("<!DOCTYPE html><html><body><h1>Page not found</h1><a href=\"/\">Home</a></body></html>"),
    )
}
