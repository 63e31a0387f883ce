use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::section::{NavigationItem, navigation};
use portfolio::view::nav_link_class;
use portfolio::{Site, UiState};

use crate::common::browser::{DocumentRoot, DomScroller};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    item: NavigationItem,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let class = nav_link_class(&props.item, ui.read().active_section());
    let id = props.item.id();
    let label = props.item.label();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                ui.write().select_section(id, &mut DomScroller);
            },
            "{label}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut ui = use_context::<Signal<UiState>>();

    let (icon, label) = if ui.read().is_dark_mode() {
        ("☀", "Switch to light theme")
    } else {
        ("☾", "Switch to dark theme")
    };

    rsx! {
        button {
            class: "btn btn-icon",
            title: label,
            aria_label: label,
            onclick: move |_| {
                ui.write().toggle_theme(&mut DocumentRoot);
            },
            "{icon}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let site = use_context::<Rc<Site>>();
    let mut ui = use_context::<Signal<UiState>>();

    let menu_open = ui.read().is_menu_open();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo gradient-text", "{site.profile.name}" }

                nav { class: "nav-links",
                    for item in navigation() {
                        NavBarButton { key: "{item.id()}", item }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: "btn btn-icon menu-toggle",
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| ui.write().toggle_menu(),
                        if menu_open {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            if menu_open {
                div { class: "mobile-menu",
                    for item in navigation() {
                        NavBarButton { key: "{item.id()}", item }
                    }
                }
            }
        }
    }
}
