use std::fmt;

// Section
//
// the scrollable regions of the page, in display order.  each variant's id is
// the DOM anchor rendered by the matching section component, and is the only
// contract between the navigation bar and the content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Experience,
    Certifications,
    TechStack,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Certifications,
        Self::TechStack,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Certifications => "certifications",
            Self::TechStack => "tech-stack",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Certifications => "Certifications",
            Self::TechStack => "Tech Stack",
            Self::Contact => "Contact",
        }
    }

    // unknown ids have no anchor on the page, so callers treat None as a no-op
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub section: Section,
}

impl NavigationItem {
    pub fn id(&self) -> &'static str {
        self.section.id()
    }

    pub fn label(&self) -> &'static str {
        self.section.label()
    }
}

impl From<Section> for NavigationItem {
    fn from(section: Section) -> Self {
        NavigationItem { section }
    }
}

pub fn navigation() -> Vec<NavigationItem> {
    Section::ALL.into_iter().map(NavigationItem::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_order_and_labels() {
        let ids: Vec<&str> = navigation().iter().map(|item| item.id()).collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "projects",
                "experience",
                "certifications",
                "tech-stack",
                "contact"
            ]
        );
        assert_eq!(navigation()[5].label(), "Tech Stack");
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_from_id_roundtrips_every_section() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
            assert_eq!(Section::from_id(&section.to_string()), Some(section));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::from_id("Home"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn test_navigation_item_follows_its_section() {
        for (item, section) in navigation().into_iter().zip(Section::ALL) {
            assert_eq!(item.section, section);
            assert_eq!(item.id(), section.id());
            assert_eq!(item.label(), section.label());
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }
}
