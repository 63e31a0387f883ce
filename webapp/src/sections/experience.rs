use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;
use portfolio::content::Experience;
use portfolio::section::Section;
use portfolio::view::Accent;

use super::SectionTitle;

#[derive(Clone, PartialEq, Props)]
struct ExperienceCardProps {
    entry: Experience,
}

#[component]
fn ExperienceCard(props: ExperienceCardProps) -> Element {
    let entry = props.entry;

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "{entry.role}" }
            p { class: "experience-period accent-blue", "{entry.organization} • {entry.period}" }
            p { class: "about-paragraph", "{entry.summary}" }

            ul { class: "experience-highlights",
                for (idx, highlight) in entry.highlights.iter().enumerate() {
                    li { key: "{idx}", "{highlight}" }
                }
            }

            div { class: "badge-row",
                for (idx, skill) in entry.skills.iter().enumerate() {
                    span { key: "{idx}", class: Accent::Cyan.badge_class(), "{skill}" }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        section { id: Section::Experience.id(), class: "page-section band",
            div { class: "container",
                SectionTitle { text: "Experience" }

                div { class: "experience",
                    for (idx, entry) in site.experience.iter().enumerate() {
                        ExperienceCard { key: "{idx}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}
