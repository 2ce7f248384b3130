//! Portfolio cards, the home-page preview and the gallery page.
//!
//! The gallery page ships in its loading state; the browser script then
//! swaps in the fragment served at [`GALLERY_ITEMS_PATH`]. Staircase cards
//! carry their keyframe tracks as `data-motion` attributes for the script
//! to interpolate against scroll progress.

use malar_core::layout::{
    reveal_delay, GalleryLayout, GRID_REVEAL_STEP_SECS, PREVIEW_REVEAL_STEP_SECS,
};
use malar_core::motion::{FloatingMotion, CARD_SPRING, MOBILE_BREAKPOINT_PX, MOBILE_MULTIPLIER};
use malar_core::portfolio::{preview_items, ImageRef, PortfolioItem, PREVIEW_ITEM_COUNT};
use malar_core::view_state::{FetchState, ImageLoadState};
use maud::{html, Markup};

use super::layout::{page_title, site_page, Page};

pub const GALLERY_PATH: &str = "/previous-work";
pub const GALLERY_ITEMS_PATH: &str = "/previous-work/items";

/// Shown when the fragment request itself fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load portfolio items";

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

fn encode_motion(m: &FloatingMotion) -> String {
    format!(
        "y={};x={};rotate={};opacity={};scale={};image-y={}",
        m.y.encode(),
        m.x.encode(),
        m.rotate.encode(),
        m.opacity.encode(),
        m.scale.encode(),
        m.image_y.encode(),
    )
}

fn delay_style(index: usize, step_secs: f64) -> String {
    format!("--reveal-delay: {}", reveal_delay(index, step_secs))
}

/// Image with spinner and fallback. The script moves `data-image-state`
/// from `pending` to `loaded` or `failed`; references that cannot render
/// start out failed.
fn image_frame(item: &PortfolioItem, loading_label: &str) -> Markup {
    let renderable = ImageRef::classify(&item.image_url).is_renderable();
    let state = if renderable {
        ImageLoadState::Pending
    } else {
        ImageLoadState::Pending.on_error()
    };
    html! {
        div.image-frame data-image-state=(state.as_str()) {
            div.image-loading {
                div.spinner {}
                p { (loading_label) }
            }
            @if renderable {
                img src=(item.image_url) alt=(item.name) loading="lazy" data-image;
            }
            div.image-fallback {
                p { "Image unavailable" }
                p.hint { "Please check your connection" }
            }
        }
    }
}

fn card_body(item: &PortfolioItem) -> Markup {
    html! {
        div.card-body {
            h3 { (item.name) }
            p { (item.description) }
        }
    }
}

pub fn grid_card(item: &PortfolioItem, index: usize) -> Markup {
    html! {
        article.bouquet-card.grid-card data-reveal style=(delay_style(index, GRID_REVEAL_STEP_SECS)) {
            (image_frame(item, "Loading..."))
            (card_body(item))
        }
    }
}

pub fn staircase_card(item: &PortfolioItem, index: usize) -> Markup {
    let desktop = FloatingMotion::for_card(index, 1.0);
    let mobile = FloatingMotion::for_card(index, MOBILE_MULTIPLIER);
    html! {
        div.staircase-row
            data-side=(desktop.side.as_str())
            data-motion=(encode_motion(&desktop))
            data-motion-mobile=(encode_motion(&mobile)) {
            article.bouquet-card.staircase-card {
                (image_frame(item, "Loading bouquet..."))
                (card_body(item))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Gallery fragment
// ---------------------------------------------------------------------------

fn layout_toggle(current: GalleryLayout) -> Markup {
    html! {
        div.layout-toggle {
            p.eyebrow { "Choose your view" }
            div.toggle-buttons role="group" {
                @for layout in GalleryLayout::ALL {
                    a.toggle-button
                        href=(format!("{GALLERY_PATH}?layout={}", layout.as_str()))
                        data-layout=(layout.as_str())
                        aria-pressed=(if layout == current { "true" } else { "false" }) {
                        (layout.label())
                    }
                }
            }
        }
    }
}

fn loading_view() -> Markup {
    html! {
        div.gallery-loading {
            div.spinner {}
            p { "Loading our beautiful bouquets..." }
            p.hint { "This won't take long" }
        }
    }
}

fn error_view(message: &str) -> Markup {
    html! {
        div.gallery-error role="alert" {
            p.title { "Error loading portfolio" }
            p.error-detail { (message) }
            button.btn-primary type="button" data-retry { "Try Again" }
        }
    }
}

fn empty_view() -> Markup {
    html! {
        div.gallery-empty {
            p.title { "No portfolio items yet" }
            p {
                "Admin, go to "
                a href="/admin" { "/admin" }
                " to add your first bouquet!"
            }
        }
    }
}

/// The swappable part of the gallery page for one fetch state.
pub fn gallery_fragment(state: &FetchState<PortfolioItem>, layout: GalleryLayout) -> Markup {
    html! {
        div.gallery-view data-state=(state.name()) data-layout=(layout.as_str()) {
            @match state {
                FetchState::Loading => { (loading_view()) },
                FetchState::Failed(message) => { (error_view(message)) },
                FetchState::Empty => { (empty_view()) },
                FetchState::Populated(items) => {
                    (layout_toggle(layout))
                    @match layout {
                        GalleryLayout::Grid => {
                            div.bouquet-grid {
                                @for (i, item) in items.iter().enumerate() {
                                    (grid_card(item, i))
                                }
                            }
                        },
                        GalleryLayout::Staircase => {
                            div.staircase
                                data-spring=(format!("{},{},{}", CARD_SPRING.stiffness, CARD_SPRING.damping, CARD_SPRING.rest_delta))
                                data-mobile-breakpoint=(MOBILE_BREAKPOINT_PX) {
                                @for (i, item) in items.iter().enumerate() {
                                    (staircase_card(item, i))
                                }
                            }
                        },
                    }
                },
            }
        }
    }
}

pub fn gallery_page(layout: GalleryLayout) -> Markup {
    site_page(
        &page_title("Previous Work"),
        Page::Gallery,
        html! {
            div.scroll-progress data-scroll-progress {}
            header.gallery-header {
                p.eyebrow { "Previous Work" }
                h1 { "Moments We've " span.accent { "Crafted" } }
                p {
                    "Each bouquet tells a story. Browse through our collection of elegant "
                    "arrangements crafted with love and attention to detail."
                }
            }
            div #gallery data-src=(format!("{GALLERY_ITEMS_PATH}?layout={}", layout.as_str())) {
                (gallery_fragment(&FetchState::Loading, layout))
            }
            template #gallery-error {
                (gallery_fragment(&FetchState::fail(LOAD_ERROR_MESSAGE), layout))
            }
            div.back-home {
                a href="/" { span { "←" } " " span { "Back to Home" } }
            }
        },
    )
}

// ---------------------------------------------------------------------------
// Home-page preview
// ---------------------------------------------------------------------------

/// The latest few items. Renders nothing when there are none.
pub fn preview_section(items: &[PortfolioItem]) -> Markup {
    let items = preview_items(items, PREVIEW_ITEM_COUNT);
    if items.is_empty() {
        return html! {};
    }
    html! {
        section.preview {
            header.section-header data-reveal {
                p.eyebrow { "Our Work" }
                h2 { "Recent " span.accent { "Creations" } }
                p {
                    "Discover our latest floral arrangements, each crafted with passion "
                    "and attention to detail."
                }
            }
            div.preview-grid {
                @for (i, item) in items.iter().enumerate() {
                    a.bouquet-card.preview-card href=(GALLERY_PATH) data-reveal style=(delay_style(i, PREVIEW_REVEAL_STEP_SECS)) {
                        (image_frame(item, "Loading..."))
                        (card_body(item))
                    }
                }
            }
            div.section-footer {
                a.btn-outline href=(GALLERY_PATH) { span { "See Previous Works" } " " span { "→" } }
            }
        }
    }
}
