#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{Level, error};

use portfolio::{Site, UiState};

mod common;

mod components;
use components::navigation::NavBar;
use components::toast::ToastHost;

mod home;
use home::Hero;

mod sections;
use sections::{
    About, Certifications, Contact, ExperienceSection, Footer, Projects, TechStackSection,
};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // the content is compiled in, so this only fails if the embedded document is broken
    let site = use_hook(|| {
        Site::load().map(Rc::new).map_err(|err| {
            error!("failed to load site content: {err:#}");
            format!("{err:#}")
        })
    });

    let page = match site {
        Ok(site) => rsx! {
            Portfolio { site }
        },
        Err(err) => rsx! {
            div { class: "load-error", "This page failed to load its content: {err}" }
        },
    };

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        {page}
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioProps {
    site: Rc<Site>,
}

// the single page.  it owns the UI state and shares it, along with the
// content, with every section through context
#[component]
fn Portfolio(props: PortfolioProps) -> Element {
    use_context_provider(|| props.site.clone());
    use_context_provider(|| Signal::new(UiState::default()));

    rsx! {
        div { class: "page",
            NavBar {}
            Hero {}
            About {}
            Projects {}
            ExperienceSection {}
            Certifications {}
            TechStackSection {}
            Contact {}
            Footer {}
            ToastHost {}
        }
    }
}
