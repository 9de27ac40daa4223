//! Candidate, filter, and file models shared by every front end.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON exactly so serde is the only
//! translation layer. Ids arrive as JSON numbers from the backend but are
//! treated as opaque strings on the client.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Skills offered as toggle chips on the search form.
pub const PREDEFINED_SKILLS: [&str; 5] = ["Python", "Django", "React", "Machine Learning", "Data Science"];

/// File extensions the upload picker accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// `accept` attribute value for the browser file input.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx";

pub const NAME_PLACEHOLDER: &str = "Not Available";
pub const FIELD_PLACEHOLDER: &str = "N/A";
pub const CERTIFICATIONS_PLACEHOLDER: &str = "None";

// =============================================================================
// CANDIDATES
// =============================================================================

/// A search result as projected by the backend. Rendered, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub resume_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub experience: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub education: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub certifications: Vec<String>,
}

impl Candidate {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => NAME_PLACEHOLDER,
        }
    }

    #[must_use]
    pub fn experience_line(&self) -> String {
        join_or(&self.experience, FIELD_PLACEHOLDER)
    }

    #[must_use]
    pub fn skills_line(&self) -> String {
        join_or(&self.skills, FIELD_PLACEHOLDER)
    }

    #[must_use]
    pub fn education_line(&self) -> String {
        join_or(&self.education, FIELD_PLACEHOLDER)
    }

    #[must_use]
    pub fn certifications_line(&self) -> String {
        join_or(&self.certifications, CERTIFICATIONS_PLACEHOLDER)
    }
}

/// Join values with `", "`, falling back to `placeholder` when nothing is left.
#[must_use]
pub fn join_or(values: &[String], placeholder: &str) -> String {
    let joined = values.join(", ");
    if joined.is_empty() { placeholder.to_owned() } else { joined }
}

/// Entry in the chat page's candidate dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// SEARCH FILTERS
// =============================================================================

/// Minimum-experience choices. The wire carries the string code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceLevel {
    None,
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
    FivePlusYears,
}

impl ExperienceLevel {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
        Self::ThreeYears,
        Self::FivePlusYears,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::SixMonths => "0.5",
            Self::OneYear => "1",
            Self::TwoYears => "2",
            Self::ThreeYears => "3",
            Self::FivePlusYears => "5",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "0 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::TwoYears => "2 Years",
            Self::ThreeYears => "3 Years",
            Self::FivePlusYears => "5+ Years",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code.trim())
    }
}

/// The search payload. The client performs no matching of its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "customSkill", default)]
    pub custom_skill: String,
    #[serde(default, with = "experience_code")]
    pub min_experience: Option<ExperienceLevel>,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl SearchFilters {
    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Flip membership of `skill` in the skill set.
    pub fn toggle_skill(&mut self, skill: &str) {
        if self.has_skill(skill) {
            self.skills.retain(|s| s != skill);
        } else {
            self.skills.push(skill.to_owned());
        }
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Move the trimmed custom-skill buffer into the skill set.
    ///
    /// Returns `false` and leaves the buffer alone when it is blank or the
    /// skill is already selected.
    pub fn add_custom_skill(&mut self) -> bool {
        let skill = self.custom_skill.trim();
        if skill.is_empty() || self.has_skill(skill) {
            return false;
        }
        self.skills.push(skill.to_owned());
        self.custom_skill.clear();
        true
    }

    pub fn add_certification(&mut self, certification: &str) -> bool {
        let certification = certification.trim();
        if certification.is_empty() || self.certifications.iter().any(|c| c == certification) {
            return false;
        }
        self.certifications.push(certification.to_owned());
        true
    }

    pub fn remove_certification(&mut self, certification: &str) {
        self.certifications.retain(|c| c != certification);
    }
}

mod experience_code {
    use super::{Deserialize, Deserializer, ExperienceLevel, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<ExperienceLevel>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map_or("", ExperienceLevel::code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(ExperienceLevel::from_code(&raw))
    }
}

// =============================================================================
// FILES
// =============================================================================

/// A resume staged for upload: the file name and its bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    /// Lower-cased extension without the dot, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.extension().is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            _ => "application/octet-stream",
        }
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => id_from_value(value).map(Some),
    }
}

fn deserialize_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .into_iter()
        .filter(|item| !item.is_null())
        .map(|item| match item {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("expected string list item, got {other}"))),
        })
        .collect()
}
