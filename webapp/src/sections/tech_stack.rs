use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;
use portfolio::content::TechCategory;
use portfolio::section::Section;
use portfolio::view::{TechColumn, tech_columns};

use super::SectionTitle;

fn category_icon(category: TechCategory) -> &'static str {
    match category {
        TechCategory::Languages => "</>",
        TechCategory::Tools => "🛢",
        TechCategory::Frameworks => "🌐",
        TechCategory::Databases => "⚙",
    }
}

#[derive(Clone, PartialEq, Props)]
struct TechColumnViewProps {
    column: TechColumn,
}

#[component]
fn TechColumnView(props: TechColumnViewProps) -> Element {
    let column = props.column;
    let badge_class = column.accent.badge_class();
    let accent_class = column.accent.text_class();
    let icon = category_icon(column.category);

    rsx! {
        div { class: "tech-column",
            div { class: "tech-icon {accent_class}", "{icon}" }
            h3 { class: "card-title", "{column.title}" }
            div { class: "badge-column",
                for (idx, entry) in column.badges.iter().enumerate() {
                    span { key: "{idx}", class: badge_class, "{entry}" }
                }
            }
        }
    }
}

#[component]
pub fn TechStackSection() -> Element {
    let site = use_context::<Rc<Site>>();
    let columns = tech_columns(&site.tech_stack);

    rsx! {
        section { id: Section::TechStack.id(), class: "page-section band",
            div { class: "container",
                SectionTitle { text: "Tech Stack" }

                div { class: "grid-4",
                    for column in columns {
                        TechColumnView { key: "{column.title}", column: column.clone() }
                    }
                }
            }
        }
    }
}
