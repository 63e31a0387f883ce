// view models for the repeated cards on the page
//
// each function is a straight projection: one card per entry, in source
// order, with nothing filtered or sorted.  the webapp turns these into rsx

use crate::content::{Certification, Project, TechCategory, TechStack};
use crate::section::{NavigationItem, Section};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Cyan,
    Teal,
    Purple,
}

impl Accent {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Blue => "badge badge-blue",
            Self::Cyan => "badge badge-cyan",
            Self::Teal => "badge badge-teal",
            Self::Purple => "badge badge-purple",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Cyan => "accent-cyan",
            Self::Teal => "accent-teal",
            Self::Purple => "accent-purple",
        }
    }
}

impl From<TechCategory> for Accent {
    fn from(category: TechCategory) -> Self {
        match category {
            TechCategory::Languages => Self::Blue,
            TechCategory::Tools => Self::Cyan,
            TechCategory::Frameworks => Self::Teal,
            TechCategory::Databases => Self::Purple,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub key: usize,
    pub title: String,
    pub description: String,
    pub image: String,
    pub github: String,
    pub badges: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificationCard {
    pub key: usize,
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechColumn {
    pub category: TechCategory,
    pub title: &'static str,
    pub accent: Accent,
    pub badges: Vec<String>,
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .map(|(key, project)| ProjectCard {
            key,
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            github: project.github.clone(),
            badges: project.tech.clone(),
        })
        .collect()
}

pub fn certification_cards(certifications: &[Certification]) -> Vec<CertificationCard> {
    certifications
        .iter()
        .enumerate()
        .map(|(key, cert)| CertificationCard {
            key,
            title: cert.title.clone(),
            organization: cert.organization.clone(),
            duration: cert.duration.clone(),
            description: cert.description.clone(),
            image: cert.image.clone(),
        })
        .collect()
}

pub fn tech_columns(stack: &TechStack) -> Vec<TechColumn> {
    stack
        .categories()
        .map(|(category, entries)| TechColumn {
            category,
            title: category.title(),
            accent: category.into(),
            badges: entries.to_vec(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Message,
}

impl FieldKind {
    // the `type` attribute for <input>; messages render as a <textarea>
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Message => "text",
            Self::Email => "email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

// the contact form, in display order.  `required` is the only validation the
// form has: the browser refuses to fire submit while one of these is empty
pub const CONTACT_FIELDS: [FormField; 4] = [
    FormField {
        name: "name",
        placeholder: "Your Name",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "email",
        placeholder: "Your Email",
        kind: FieldKind::Email,
        required: true,
    },
    FormField {
        name: "subject",
        placeholder: "Subject",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "message",
        placeholder: "Your Message",
        kind: FieldKind::Message,
        required: true,
    },
];

pub fn nav_link_class(item: &NavigationItem, active: Section) -> &'static str {
    if item.section == active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Site;
    use crate::section::navigation;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_owned(),
            description: String::new(),
            tech: vec!["Rust".to_owned()],
            github: "https://example.com".to_owned(),
            image: "/img.png".to_owned(),
        }
    }

    #[test]
    fn test_project_cards_preserve_count_and_order() {
        let projects: Vec<Project> = ["c", "a", "b", "a"].into_iter().map(project).collect();
        let cards = project_cards(&projects);

        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b", "a"]);
        assert_eq!(cards.iter().map(|c| c.key).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert!(project_cards(&[]).is_empty());
        assert!(certification_cards(&[]).is_empty());
    }

    #[test]
    fn test_certification_cards_match_content() {
        let site = Site::load().unwrap();
        let cards = certification_cards(&site.certifications);
        assert_eq!(cards.len(), site.certifications.len());
        for (card, cert) in cards.iter().zip(&site.certifications) {
            assert_eq!(card.title, cert.title);
            assert_eq!(card.image, cert.image);
        }
    }

    #[test]
    fn test_tech_columns_one_badge_per_entry() {
        let site = Site::load().unwrap();
        let columns = tech_columns(&site.tech_stack);
        assert_eq!(columns.len(), 4);
        for column in &columns {
            assert_eq!(column.badges, site.tech_stack.entries(column.category));
        }
        assert_eq!(columns[3].accent, Accent::Purple);
    }

    #[test]
    fn test_every_contact_field_is_required() {
        assert_eq!(CONTACT_FIELDS.len(), 4);
        assert!(CONTACT_FIELDS.iter().all(|field| field.required));
    }

    #[test]
    fn test_contact_field_kinds() {
        let names: Vec<&str> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
        assert_eq!(CONTACT_FIELDS[1].kind.input_type(), "email");
        assert_eq!(CONTACT_FIELDS[3].kind, FieldKind::Message);
    }

    #[test]
    fn test_only_active_link_is_highlighted() {
        let active: Vec<&str> = navigation()
            .iter()
            .filter(|item| nav_link_class(item, Section::Projects) == "nav-link active")
            .map(|item| item.id())
            .collect();
        assert_eq!(active, vec!["projects"]);
    }
}
