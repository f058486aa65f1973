//! Typed mirror of the profile document.
//!
//! Every field the page and print composers read is declared here, so a
//! document with a missing field fails at load time instead of halfway
//! through rendering.

use crate::error::ProfileError;
use serde::{Deserialize, Deserializer, Serialize};

/// The root of the profile document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub personal: Personal,
    pub about: About,
    pub experience: Vec<Job>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Personal {
    pub name: Name,
    #[serde(deserialize_with = "scalar")]
    pub title: String,
    #[serde(deserialize_with = "scalar")]
    pub tagline: String,
    #[serde(deserialize_with = "scalar")]
    pub summary: String,
    /// Short availability line shown in the hero badge.
    #[serde(deserialize_with = "scalar")]
    pub status: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Name {
    #[serde(deserialize_with = "scalar")]
    pub first: String,
    #[serde(deserialize_with = "scalar")]
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    #[serde(deserialize_with = "scalar")]
    pub email: String,
    #[serde(deserialize_with = "scalar")]
    pub phone: String,
    pub linkedin: Link,
    pub website: Link,
}

/// An external link with separate target and display text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    #[serde(deserialize_with = "scalar")]
    pub url: String,
    #[serde(deserialize_with = "scalar")]
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct About {
    #[serde(deserialize_with = "scalar")]
    pub title: String,
    #[serde(deserialize_with = "scalar_seq")]
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stat {
    #[serde(deserialize_with = "scalar")]
    pub value: String,
    #[serde(deserialize_with = "scalar")]
    pub label: String,
}

/// One position in the experience timeline. Entries keep their authored
/// order, which is expected to be reverse-chronological.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Job {
    #[serde(deserialize_with = "scalar")]
    pub role: String,
    #[serde(deserialize_with = "scalar")]
    pub company: String,
    #[serde(deserialize_with = "scalar")]
    pub location: String,
    #[serde(deserialize_with = "scalar")]
    pub period: String,
    #[serde(deserialize_with = "scalar_seq")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillGroup {
    #[serde(deserialize_with = "scalar")]
    pub icon: String,
    #[serde(deserialize_with = "scalar")]
    pub category: String,
    #[serde(deserialize_with = "scalar_seq")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Certification {
    #[serde(deserialize_with = "scalar")]
    pub icon: String,
    #[serde(deserialize_with = "scalar")]
    pub name: String,
    #[serde(deserialize_with = "scalar")]
    pub issuer: String,
    #[serde(deserialize_with = "scalar")]
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Education {
    #[serde(deserialize_with = "scalar")]
    pub degree: String,
    #[serde(deserialize_with = "scalar")]
    pub institution: String,
    #[serde(deserialize_with = "scalar")]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Theme {
    #[serde(deserialize_with = "scalar")]
    pub copyright_year: String,
    #[serde(deserialize_with = "scalar")]
    pub footer_text: String,
}

impl Profile {
    /// Parses and validates a YAML (or JSON) profile document.
    pub fn from_yaml(source: &str) -> Result<Self, ProfileError> {
        let profile: Profile = serde_yaml::from_str(source)?;
        profile.validate()?;
        log::debug!(
            "Profile loaded: {} jobs, {} skill groups, {} certifications, {} education entries",
            profile.experience.len(),
            profile.skills.len(),
            profile.certifications.len(),
            profile.education.len()
        );
        Ok(profile)
    }

    /// Rejects documents whose identity fields are present but blank.
    ///
    /// Empty sequences are fine; they render as empty sections.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let required = [
            ("personal.name.first", &self.personal.name.first),
            ("personal.name.last", &self.personal.name.last),
            ("personal.title", &self.personal.title),
        ];
        for (path, value) in required {
            if value.trim().is_empty() {
                return Err(ProfileError::MissingField { path });
            }
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.personal.name.first, self.personal.name.last)
    }

    /// File name offered for the exported print document, e.g. `Ada_Lovelace_CV.pdf`.
    ///
    /// Always a single path component: separators and control characters in
    /// the name parts are replaced with `_`.
    pub fn export_file_name(&self) -> String {
        format!(
            "{}_{}_CV.pdf",
            file_safe(&self.personal.name.first),
            file_safe(&self.personal.name.last)
        )
    }
}

fn file_safe(part: &str) -> String {
    part.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

impl Personal {
    /// Navigation logo text: first initial, underscore, upper-cased last name.
    pub fn logo(&self) -> String {
        let initial: String = self.name.first.chars().take(1).collect();
        format!("{}_{}", initial, self.name.last.to_uppercase())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

// Authors write `year: 2023` or `value: 12` without quotes.
fn scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn scalar_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(items.into_iter().map(String::from).collect())
}
