//! Document shell, navbar and footer shared by every page.

use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Casa De Malar";

/// Phone link behind "Call Malar".
pub const PHONE_HREF: &str = "tel:+1234567890";

const STYLESHEET: &str = "/static/site.css";
const SCRIPT: &str = "/static/site.js";

/// Which page a shell is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Gallery,
    Admin,
    Error,
}

impl Page {
    fn body_class(self) -> &'static str {
        match self {
            Page::Home => "page-home",
            Page::Gallery => "page-gallery",
            Page::Admin => "page-admin",
            Page::Error => "page-error",
        }
    }
}

struct NavItem {
    label: &'static str,
    /// Either an in-page anchor (`#...`) on the home page or an absolute path.
    href: &'static str,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Our Story", href: "#how-it-works" },
    NavItem { label: "Previous Work", href: "/previous-work" },
    NavItem { label: "Reviews", href: "#reviews" },
    NavItem { label: "Contact", href: "#craft" },
];

/// Anchors point at home-page sections, so off the home page they need
/// the `/` prefix.
fn nav_href(href: &'static str, page: Page) -> String {
    if href.starts_with('#') && page != Page::Home {
        format!("/{href}")
    } else {
        href.to_string()
    }
}

/// Renders a complete HTML document.
pub fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET);
                script src=(SCRIPT) defer {}
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

pub fn navbar(page: Page) -> Markup {
    html! {
        nav.navbar data-navbar {
            div.navbar-inner {
                a.brand href="/" { (SITE_NAME) }
                ul.nav-links {
                    @for item in &NAV_ITEMS {
                        li { a href=(nav_href(item.href, page)) { (item.label) } }
                    }
                }
                a.nav-call href=(PHONE_HREF) { "Call Malar" }
            }
        }
    }
}

pub fn footer(year: i32) -> Markup {
    html! {
        footer.site-footer {
            a.brand href="/" { (SITE_NAME) }
            p.tagline { "Handcrafted bouquets for moments that matter." }
            p.copyright { "© " (year) " " (SITE_NAME) }
        }
    }
}

/// A page with navbar, main content and footer.
pub fn site_page(title: &str, page: Page, content: Markup) -> Markup {
    let year = chrono::Utc::now().year();
    base_document(
        title,
        Some(page.body_class()),
        html! {
            (navbar(page))
            main { (content) }
            (footer(year))
        },
    )
}

/// `"{prefix} | Casa De Malar"`.
pub fn page_title(prefix: &str) -> String {
    format!("{prefix} | {SITE_NAME}")
}
