//! The content record a portfolio site is generated from.
//!
//! Field names serialize in camelCase so records exported by the browser
//! collection flow load unchanged. Optional text fields treat an empty or
//! whitespace-only string the same as a missing one.

use serde::{Deserialize, Deserializer, Serialize};

/// Theme selected when a record does not name one.
pub const DEFAULT_THEME_ID: &str = "modern-blue";

/// The full input to site generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRecord {
    pub personal_info: PersonalInfo,
    pub about: AboutInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub social_links: SocialLinks,

    /// Resume document embedded as a data URI
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_file: Option<String>,

    /// Theme identifier, resolved against a [`crate::ThemeRegistry`]
    pub selected_theme: String,
}

impl Default for ContentRecord {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            about: AboutInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            social_links: SocialLinks::default(),
            resume_file: None,
            selected_theme: DEFAULT_THEME_ID.to_string(),
        }
    }
}

impl ContentRecord {
    /// The embedded resume, if one was supplied.
    pub fn resume(&self) -> Option<&str> {
        self.resume_file.as_deref()
    }

    pub fn has_resume(&self) -> bool {
        self.resume_file.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Data URI or URL of the profile photo
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutInfo {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Skill labels in display order. Not deduplicated.
    pub skills: Vec<String>,

    pub languages: Vec<LanguageSkill>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub work_style: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,

    pub hobbies: Vec<String>,
}

/// A spoken language with a proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub name: String,

    /// Proficiency on a 1-5 scale. Not validated; fractional and negative
    /// values load as given.
    pub level: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ongoing position; `end_date` is ignored when set
    pub current: bool,
}

impl Experience {
    /// End of the period as displayed: "Present" for a current position.
    pub fn end_label(&self) -> &str {
        if self.current {
            "Present"
        } else {
            &self.end_date
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,

    /// Field of study
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Graduation year
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Embedded images; the first one is the cover
    pub images: Vec<String>,

    pub tech_stack: Vec<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Project {
    /// The cover image, if the first image is present and non-empty.
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|image| !image.trim().is_empty())
    }
}

/// Profile links for the fixed set of supported platforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A present social link paired with the icon that represents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink<'a> {
    pub icon: &'static str,
    pub url: &'a str,
}

impl SocialLinks {
    /// Present links in fixed platform order.
    pub fn present(&self) -> Vec<SocialLink<'_>> {
        [
            ("linkedin", &self.linkedin),
            ("github", &self.github),
            ("twitter", &self.twitter),
            ("instagram", &self.instagram),
            ("globe", &self.website),
        ]
        .into_iter()
        .filter_map(|(icon, url)| url.as_deref().map(|url| SocialLink { icon, url }))
        .collect()
    }
}

/// Deserialize an optional string, mapping blank values to `None`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_strings_deserialize_as_absent() {
        let json = r#"{
            "personalInfo": { "fullName": "Ada Lovelace", "title": "", "email": "   " },
            "resumeFile": ""
        }"#;

        let record: ContentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.personal_info.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(record.personal_info.title, None);
        assert_eq!(record.personal_info.email, None);
        assert!(!record.has_resume());
    }

    #[test]
    fn language_levels_load_unvalidated() {
        let json = r#"{
            "about": { "languages": [
                { "name": "Latin", "level": -1 },
                { "name": "Dutch", "level": 3.5 },
                { "name": "English", "level": 5 }
            ] }
        }"#;

        let record: ContentRecord = serde_json::from_str(json).unwrap();

        let levels: Vec<f64> = record.about.languages.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![-1.0, 3.5, 5.0]);
    }

    #[test]
    fn missing_theme_defaults_to_modern_blue() {
        let record: ContentRecord = serde_json::from_str("{}").unwrap();

        assert_eq!(record.selected_theme, DEFAULT_THEME_ID);
        assert!(record.experience.is_empty());
    }

    #[test]
    fn current_position_ends_at_present() {
        let mut exp = Experience {
            start_date: "2020".to_string(),
            end_date: "2022".to_string(),
            ..Default::default()
        };
        assert_eq!(exp.end_label(), "2022");

        exp.current = true;
        assert_eq!(exp.end_label(), "Present");
    }

    #[test]
    fn cover_image_is_first_non_empty_image() {
        let mut project = Project::default();
        assert_eq!(project.cover_image(), None);

        project.images = vec!["".to_string(), "data:image/png;base64,AA".to_string()];
        assert_eq!(project.cover_image(), None);

        project.images.reverse();
        assert_eq!(project.cover_image(), Some("data:image/png;base64,AA"));
    }

    #[test]
    fn social_links_keep_platform_order() {
        let links = SocialLinks {
            website: Some("https://ada.dev".to_string()),
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            ..Default::default()
        };

        let present = links.present();

        assert_eq!(present.len(), 2);
        assert_eq!(present[0].icon, "linkedin");
        assert_eq!(present[1].icon, "globe");
        assert!(SocialLinks::default().present().is_empty());
    }
}
