use malar_core::portfolio::PortfolioItem;
use malar_core::review::Review;
use malar_core::review_form::ReviewFormState;
use maud::{html, Markup};

use super::layout::{site_page, Page, SITE_NAME};
use super::{portfolio, reviews, sections};

/// The home page, top to bottom.
pub fn home_page(items: &[PortfolioItem], all_reviews: &[Review], form: &ReviewFormState) -> Markup {
    site_page(
        SITE_NAME,
        Page::Home,
        html! {
            (sections::hero())
            (sections::how_it_works())
            (sections::portfolio_teaser())
            (portfolio::preview_section(items))
            (sections::craft())
            (reviews::reviews_section(all_reviews))
            (reviews::review_form_section(form))
        },
    )
}
