use axum::http::StatusCode;
use maud::{html, Markup};

use super::layout::{page_title, site_page, Page};

/// A full page describing a failed request.
pub fn error_page(status: StatusCode, heading: &str, message: &str) -> Markup {
    site_page(
        &page_title(heading),
        Page::Error,
        html! {
            section.error-page data-status=(status.as_u16()) {
                p.eyebrow { (status.as_u16()) }
                h1 { (heading) }
                p.error-message { (message) }
                a.btn-outline href="/" { "Back to Home" }
            }
        },
    )
}
