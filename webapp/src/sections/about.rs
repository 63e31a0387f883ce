use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;
use portfolio::section::Section;

use super::SectionTitle;

#[component]
pub fn About() -> Element {
    let site = use_context::<Rc<Site>>();
    let education = &site.education;

    rsx! {
        section { id: Section::About.id(), class: "page-section band",
            div { class: "container",
                SectionTitle { text: "About Me" }

                div { class: "grid-2",
                    div {
                        h3 { class: "about-heading accent-blue", "Education & Background" }
                        div { class: "education-card",
                            h4 { class: "card-title", "{education.degree}" }
                            p { class: "accent-blue", "{education.institution}" }
                            p { class: "contact-detail", "{education.grade}" }
                        }
                    }

                    div {
                        h3 { class: "about-heading accent-cyan", "Passion & Vision" }
                        for (idx, paragraph) in site.about.iter().enumerate() {
                            p { key: "{idx}", class: "about-paragraph", "{paragraph}" }
                        }
                    }
                }
            }
        }
    }
}
