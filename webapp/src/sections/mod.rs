use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;

mod about;
mod certifications;
mod contact;
mod experience;
mod projects;
mod tech_stack;

pub use about::About;
pub use certifications::Certifications;
pub use contact::Contact;
pub use experience::ExperienceSection;
pub use projects::Projects;
pub use tech_stack::TechStackSection;

#[derive(Clone, PartialEq, Props)]
pub struct SectionTitleProps {
    text: String,
}

#[component]
pub fn SectionTitle(props: SectionTitleProps) -> Element {
    rsx! {
        h2 { class: "section-title",
            span { class: "gradient-text", "{props.text}" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        footer { class: "page-footer",
            div { class: "container",
                p { "{site.profile.copyright}" }
                p { class: "tagline", "{site.profile.tagline}" }
            }
        }
    }
}
