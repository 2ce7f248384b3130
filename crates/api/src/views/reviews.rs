use malar_core::review::{
    group_reviews, Review, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MAX_RATING, MIN_RATING,
};
use malar_core::review_form::ReviewFormState;
use maud::{html, Markup};

fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn review_card(review: &Review, class: &str, index: usize) -> Markup {
    html! {
        figure class=(class) data-reveal style=(format!("--reveal-delay: {:.2}s", index as f64 * 0.15)) {
            blockquote { "\u{201C}" (review.message) "\u{201D}" }
            figcaption {
                p.reviewer { (review.name) }
                p.review-meta {
                    span.stars aria-label=(format!("{} out of {MAX_RATING} stars", review.rating)) { (stars(review.rating)) }
                    " · "
                    time datetime=(review.created_at.to_rfc3339()) { (review.created_at.format("%B %Y").to_string()) }
                }
            }
        }
    }
}

/// Featured reviews plus the horizontally scrolling remainder.
pub fn reviews_section(reviews: &[Review]) -> Markup {
    let groups = group_reviews(reviews);
    html! {
        section.reviews id="reviews" {
            div.review-actions data-reveal {
                a.btn-outline href="#reviews" { "See Reviews" }
                a.btn-primary href="#craft" { "Book Bouquet" }
            }
            @if groups.featured.is_empty() {
                p.reviews-empty data-reveal {
                    "No stories yet. Be the first to share yours below."
                }
            } @else {
                div.featured-reviews {
                    @for (i, review) in groups.featured.iter().enumerate() {
                        (review_card(review, "review-card featured", i))
                    }
                }
            }
            @if !groups.more.is_empty() {
                div.more-reviews {
                    div.more-header {
                        p.eyebrow { "More Stories" }
                        div.scroll-buttons {
                            button type="button" data-scroll-strip="-340" aria-label="Scroll left" { "‹" }
                            button type="button" data-scroll-strip="340" aria-label="Scroll right" { "›" }
                        }
                    }
                    div.review-strip data-review-strip {
                        @for review in groups.more {
                            (review_card(review, "review-card compact", 0))
                        }
                    }
                }
            }
        }
    }
}

/// The "Write a Review" form or, once submitted, the thank-you note.
pub fn review_form_section(state: &ReviewFormState) -> Markup {
    html! {
        section.write-review id="write-review" {
            div data-reveal {
                p.eyebrow { "Share Your Story" }
                h2 { "Write a " span.accent { "Review" } }
                @match state {
                    ReviewFormState::Submitted { name } => {
                        div.review-thanks role="status" {
                            p.thanks-title { "Thank you, " (name) "." }
                            p { "Your story means the world to us." }
                        }
                    },
                    ReviewFormState::Editing { draft, alert } => {
                        form.review-form method="post" action="/reviews#write-review" data-review-form {
                            @if let Some(alert) = alert {
                                p.form-alert role="alert" { (alert) }
                            }
                            label for="review-name" { "Your Name" }
                            input #review-name type="text" name="name" value=(draft.name)
                                maxlength=(MAX_NAME_LENGTH) placeholder="Enter your name" required;

                            fieldset.star-rating {
                                legend { "Your Rating" }
                                @for star in MIN_RATING..=MAX_RATING {
                                    @let id = format!("rating-{star}");
                                    input type="radio" name="rating" id=(id) value=(star)
                                        checked[draft.rating == star] required;
                                    label for=(id) title=(format!("Rate {star} star{}", if star == 1 { "" } else { "s" })) { "★" }
                                }
                            }

                            label for="review-message" { "Your Experience" }
                            textarea #review-message name="message" rows="4"
                                maxlength=(MAX_MESSAGE_LENGTH) placeholder="Tell us about your moment..." required {
                                (draft.message)
                            }
                            button.btn-primary type="submit" { "Submit Review" }
                        }
                    },
                }
            }
        }
    }
}
