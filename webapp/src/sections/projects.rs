use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;
use portfolio::section::Section;
use portfolio::view::{Accent, ProjectCard, project_cards};

use super::SectionTitle;

#[derive(Clone, PartialEq, Props)]
struct ProjectCardViewProps {
    card: ProjectCard,
}

#[component]
fn ProjectCardView(props: ProjectCardViewProps) -> Element {
    let card = props.card;

    rsx! {
        div { class: "card hoverable",
            div { class: "project-image",
                img { src: "{card.image}", alt: "{card.title}" }
            }
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-description", "{card.description}" }

            div { class: "badge-row",
                for (idx, tech) in card.badges.iter().enumerate() {
                    span { key: "{idx}", class: Accent::Blue.badge_class(), "{tech}" }
                }
            }

            a {
                class: "btn btn-outline btn-block",
                href: "{card.github}",
                target: "_blank",
                rel: "noopener noreferrer",
                "View on GitHub"
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let site = use_context::<Rc<Site>>();
    let cards = project_cards(&site.projects);

    rsx! {
        section { id: Section::Projects.id(), class: "page-section",
            div { class: "container",
                SectionTitle { text: "Featured Projects" }

                div { class: "grid-2",
                    for card in cards {
                        ProjectCardView { key: "{card.key}", card: card.clone() }
                    }
                }
            }
        }
    }
}
