use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

// the page content is compiled in; there is nothing to fetch at runtime
const SITE_TOML: &str = include_str!("../content/site.toml");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub profile: Profile,
    pub education: Education,
    pub about: Vec<String>,
    pub resume: ResumeAsset,
    pub social: SocialLinks,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub tech_stack: TechStack,
    pub contact: Vec<ContactChannel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub copyright: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub grade: String,
}

// a static file served next to the app, downloaded under a fixed name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAsset {
    pub path: String,
    pub file_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Languages,
    Tools,
    Frameworks,
    Databases,
}

impl TechCategory {
    pub const ALL: [TechCategory; 4] = [
        Self::Languages,
        Self::Tools,
        Self::Frameworks,
        Self::Databases,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Tools => "Tools & Platforms",
            Self::Frameworks => "Frameworks",
            Self::Databases => "Databases",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
}

impl TechStack {
    pub fn entries(&self, category: TechCategory) -> &[String] {
        match category {
            TechCategory::Languages => &self.languages,
            TechCategory::Tools => &self.tools,
            TechCategory::Frameworks => &self.frameworks,
            TechCategory::Databases => &self.databases,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (TechCategory, &[String])> {
        TechCategory::ALL
            .into_iter()
            .map(|category| (category, self.entries(category)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub label: String,
    pub detail: String,
    pub href: Option<String>,
}

impl Site {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_toml(SITE_TOML).context("failed to load embedded site content")
    }

    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let site: Site = toml::from_str(doc).context("failed to parse site content")?;
        site.validate()?;

        debug!(
            {projects = site.projects.len(), certifications = site.certifications.len()},
            "loaded site content"
        );
        Ok(site)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.projects.is_empty() {
            return Err(anyhow::Error::msg("site content lists no projects"));
        }

        if let Some(idx) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(anyhow::Error::msg(format!("project {idx} has an empty title")));
        }

        if let Some(idx) = self
            .certifications
            .iter()
            .position(|c| c.title.trim().is_empty())
        {
            return Err(anyhow::Error::msg(format!(
                "certification {idx} has an empty title"
            )));
        }

        if self.resume.path.trim().is_empty() {
            return Err(anyhow::Error::msg("resume path is empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let site = Site::load().expect("embedded content should parse");
        assert_eq!(site.profile.name, "AbdulArshath A");
        assert_eq!(site.projects.len(), 2);
        assert_eq!(site.certifications.len(), 3);
        assert_eq!(site.experience.len(), 1);
        assert_eq!(site.contact.len(), 4);
    }

    #[test]
    fn test_embedded_project_order() {
        let site = Site::load().unwrap();
        assert_eq!(site.projects[0].title, "Smart Garbage Monitoring System");
        assert_eq!(site.projects[1].title, "Kovil Management System");
        assert_eq!(
            site.projects[0].tech,
            vec!["Arduino", "IoT", "Blynk", "C++", "Sensors"]
        );
    }

    #[test]
    fn test_tech_stack_category_order() {
        let site = Site::load().unwrap();
        let titles: Vec<&str> = site
            .tech_stack
            .categories()
            .map(|(category, _)| category.title())
            .collect();
        assert_eq!(
            titles,
            vec!["Languages", "Tools & Platforms", "Frameworks", "Databases"]
        );
        assert_eq!(
            site.tech_stack.entries(TechCategory::Databases),
            &["MongoDB".to_owned(), "MySQL".to_owned()]
        );
    }

    #[test]
    fn test_certifications_have_images() {
        let site = Site::load().unwrap();
        assert!(site.certifications.iter().all(|c| !c.image.is_empty()));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = Site::from_toml("profile = 3").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_validation_rejects_empty_projects() {
        let mut doc: toml::Table = toml::from_str(SITE_TOML).unwrap();
        doc.insert("projects".to_owned(), toml::Value::Array(Vec::new()));
        let err = Site::from_toml(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("no projects"));
    }

    #[test]
    fn test_validation_rejects_blank_project_title() {
        let mut site = Site::load().unwrap();
        site.projects[1].title = " \t ".to_owned();

        let err = site.validate().unwrap_err();
        assert_eq!(err.to_string(), "project 1 has an empty title");
    }

    #[test]
    fn test_validation_rejects_blank_certification_title() {
        let mut site = Site::load().unwrap();
        site.certifications[2].title = "   ".to_owned();

        let err = site.validate().unwrap_err();
        assert_eq!(err.to_string(), "certification 2 has an empty title");
    }

    #[test]
    fn test_validation_rejects_blank_resume_path() {
        let site = Site::load().unwrap();
        let mut broken = site.clone();
        broken.resume.path = "  ".to_owned();
        assert!(broken.validate().is_err());
        assert!(site.validate().is_ok());
    }
}
