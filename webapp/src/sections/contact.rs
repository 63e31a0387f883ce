use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::Site;
use portfolio::content::{ContactChannel, ContactKind};
use portfolio::section::Section;
use portfolio::state::submit_contact;
use portfolio::view::{CONTACT_FIELDS, FieldKind};

use super::SectionTitle;
use crate::components::toast::ToastNotifier;

fn channel_icon(kind: ContactKind) -> (&'static str, &'static str) {
    match kind {
        ContactKind::Email => ("✉", "accent-blue"),
        ContactKind::Phone => ("☎", "accent-cyan"),
        ContactKind::LinkedIn => ("in", "accent-blue"),
        ContactKind::GitHub => ("⌥", ""),
    }
}

#[derive(Clone, PartialEq, Props)]
struct ChannelRowProps {
    channel: ContactChannel,
}

#[component]
fn ChannelRow(props: ChannelRowProps) -> Element {
    let channel = props.channel;
    let (icon, accent) = channel_icon(channel.kind);

    rsx! {
        div { class: "contact-channel",
            span { class: "contact-icon {accent}", "{icon}" }
            div {
                p { class: "contact-label", "{channel.label}" }
                if let Some(href) = channel.href.as_deref() {
                    a { class: "contact-detail", href: "{href}", "{channel.detail}" }
                } else {
                    p { class: "contact-detail", "{channel.detail}" }
                }
            }
        }
    }
}

// the form has no backend: every field in CONTACT_FIELDS is required, so the
// browser blocks empty submissions, and a successful submit only raises a toast
#[component]
fn ContactForm() -> Element {
    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit_contact(&mut ToastNotifier);
            },
            for field in CONTACT_FIELDS {
                div { key: "{field.name}", class: "form-group",
                    if field.kind == FieldKind::Message {
                        textarea {
                            class: "form-textarea",
                            name: field.name,
                            placeholder: field.placeholder,
                            required: field.required,
                        }
                    } else {
                        input {
                            class: "form-input",
                            name: field.name,
                            r#type: field.kind.input_type(),
                            placeholder: field.placeholder,
                            required: field.required,
                        }
                    }
                }
            }
            button { class: "btn btn-gradient", r#type: "submit", "Send Message" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        section { id: Section::Contact.id(), class: "page-section",
            div { class: "container",
                SectionTitle { text: "Get In Touch" }

                div { class: "grid-2",
                    div {
                        h3 { class: "contact-heading", "Contact Information" }
                        for (idx, channel) in site.contact.iter().enumerate() {
                            ChannelRow { key: "{idx}", channel: channel.clone() }
                        }

                        div { class: "social-buttons",
                            a {
                                class: "btn btn-primary",
                                href: "{site.social.linkedin}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "LinkedIn",
                                "LinkedIn"
                            }
                            a {
                                class: "btn btn-outline",
                                href: "{site.social.github}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "GitHub",
                                "GitHub"
                            }
                        }
                    }

                    div {
                        h3 { class: "contact-heading", "Send a Message" }
                        ContactForm {}
                    }
                }
            }
        }
    }
}
