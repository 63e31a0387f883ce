use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::section::Section;
use portfolio::state::download_resume;
use portfolio::{Site, UiState};

use crate::common::browser::{AnchorDownloader, DomScroller};
use crate::components::toast::ToastNotifier;

#[component]
pub fn Hero() -> Element {
    let site = use_context::<Rc<Site>>();
    let mut ui = use_context::<Signal<UiState>>();

    let resume = site.resume.clone();
    let profile = &site.profile;

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title",
                    span { class: "gradient-text", "{profile.name}" }
                }
                h2 { class: "hero-subtitle", "{profile.headline}" }
                p { class: "hero-summary", "{profile.summary}" }

                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| download_resume(&resume, &mut AnchorDownloader, &mut ToastNotifier),
                        "⭳ Download Resume"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| {
                            ui.write().go_to(Section::Projects, &mut DomScroller);
                        },
                        "View Projects"
                    }
                    button {
                        class: "btn btn-outline cyan btn-lg",
                        onclick: move |_| {
                            ui.write().go_to(Section::Contact, &mut DomScroller);
                        },
                        "Contact Me"
                    }
                }
            }
        }
    }
}
