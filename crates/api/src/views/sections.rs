//! Static storytelling sections of the home page.
//!
//! Elements marked `data-reveal` fade in once they scroll into view;
//! `--reveal-delay` staggers siblings.

use maud::{html, Markup};

use super::layout::PHONE_HREF;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Tell Us Your Moment",
        description: "Share the emotion, the occasion, the person. Every bouquet begins with a feeling.",
    },
    Step {
        number: "02",
        title: "We Design Emotionally",
        description: "Malar crafts each arrangement to carry the weight and warmth of your story.",
    },
    Step {
        number: "03",
        title: "You Deliver Meaning",
        description: "A bouquet arrives, not just beautiful, but deeply personal and unforgettable.",
    },
];

pub fn hero() -> Markup {
    html! {
        section.hero {
            div.hero-backdrop {}
            div.hero-content {
                h1.hero-title data-reveal {
                    "Not just flowers."
                    br;
                    span.accent { "Moments that stay." }
                }
                div data-reveal style="--reveal-delay: 0.5s" {
                    a.btn-primary href="#craft" { "Tell Us Your Story" }
                }
            }
        }
    }
}

pub fn how_it_works() -> Markup {
    html! {
        section.split-section id="how-it-works" {
            div.split-text data-reveal {
                p.eyebrow { "How It Works" }
                h2 {
                    "Every bouquet tells"
                    br;
                    span.accent { "a story" }
                }
                ol.steps {
                    @for step in &STEPS {
                        li.step {
                            span.step-number { (step.number) }
                            div {
                                h3 { (step.title) }
                                p { (step.description) }
                            }
                        }
                    }
                }
            }
            div.step-cards {
                @for (i, step) in STEPS.iter().enumerate() {
                    div.step-card data-reveal style=(format!("--reveal-delay: {:.1}s", i as f64 * 0.2)) {
                        p.eyebrow { "Step " (step.number) }
                        h4 { (step.title) }
                        p { (step.description) }
                    }
                }
            }
        }
    }
}

/// Teaser pointing at the gallery page.
pub fn portfolio_teaser() -> Markup {
    html! {
        section.portfolio-teaser data-reveal {
            p.eyebrow { "Portfolio" }
            h2 { "Moments We've " span.accent { "Crafted" } }
            p {
                "Each arrangement is a chapter in someone's love story, a whispered apology, "
                "a celebration of life's fleeting beauty."
            }
            a.btn-outline href="/previous-work" { "See Previous Works →" }
        }
    }
}

pub fn craft() -> Markup {
    html! {
        section.split-section id="craft" {
            div.craft-image data-reveal {
                div.craft-photo role="img" aria-label="Florist carefully tying a ribbon on a handmade bouquet" {}
            }
            div.split-text data-reveal style="--reveal-delay: 0.15s" {
                p.eyebrow { "The Craft" }
                h2 {
                    "Handmade with"
                    br;
                    span.accent { "intention" }
                }
                p {
                    "Every petal is chosen with purpose. Every stem placed to echo the emotion "
                    "you wish to share. At Casa De Malar, bouquets aren't assembled; they're "
                    "composed, like a piece of music written just for your moment."
                }
                p {
                    "Malar works personally with each client, listening to the story behind the "
                    "occasion before a single flower is touched."
                }
                a.btn-primary href=(PHONE_HREF) { "Connect With Malar" }
            }
        }
    }
}
