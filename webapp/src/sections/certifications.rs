use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;
use portfolio::section::Section;
use portfolio::view::{CertificationCard, certification_cards};

use super::SectionTitle;

#[derive(Clone, PartialEq, Props)]
struct CertificationCardViewProps {
    card: CertificationCard,
}

#[component]
fn CertificationCardView(props: CertificationCardViewProps) -> Element {
    let card = props.card;

    rsx! {
        div { class: "card hoverable cyan",
            h3 { class: "card-title", "{card.title}" }
            p { class: "accent-cyan", "{card.organization}" }
            p { class: "cert-duration", "{card.duration}" }
            p { class: "about-paragraph", "{card.description}" }

            // certificate scans are plain static files; a missing one is a 404 in the new tab
            a {
                class: "btn btn-outline cyan btn-block",
                href: "{card.image}",
                target: "_blank",
                rel: "noopener noreferrer",
                "View Certificate"
            }
        }
    }
}

#[component]
pub fn Certifications() -> Element {
    let site = use_context::<Rc<Site>>();
    let cards = certification_cards(&site.certifications);

    rsx! {
        section { id: Section::Certifications.id(), class: "page-section",
            div { class: "container",
                SectionTitle { text: "Certifications 🏆" }

                div { class: "grid-3",
                    for card in cards {
                        CertificationCardView { key: "{card.key}", card: card.clone() }
                    }
                }
            }
        }
    }
}
