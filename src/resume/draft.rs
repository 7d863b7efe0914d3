// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Editable resume draft.
//!
//! A draft lives entirely on the client side of the engine: it is never
//! persisted, and every edit is an in-place update identified by an
//! [`EntryId`]. Updates that name an unknown id are silently ignored.

use super::templates::Template;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Identifier of one experience or education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Experience {
    #[serde(default)]
    pub id: EntryId,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    /// Free text, conventionally `"Jan 2022 - Present"`
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Education {
    #[serde(default)]
    pub id: EntryId,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Year,
}

impl FromStr for PersonalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" | "full_name" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "location" => Ok(Self::Location),
            "summary" => Ok(Self::Summary),
            other => Err(format!("unknown personal field '{}'", other)),
        }
    }
}

impl FromStr for ExperienceField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(Self::Company),
            "position" => Ok(Self::Position),
            "duration" => Ok(Self::Duration),
            "description" => Ok(Self::Description),
            other => Err(format!("unknown experience field '{}'", other)),
        }
    }
}

impl FromStr for EducationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" => Ok(Self::School),
            "degree" => Ok(Self::Degree),
            "year" => Ok(Self::Year),
            other => Err(format!("unknown education field '{}'", other)),
        }
    }
}

/// A part of the draft that must be filled in before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RequiredPart {
    FullName,
    Email,
    Phone,
    Location,
    Summary,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResumeDraft {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    /// Trimmed, non-blank, no exact duplicates
    #[serde(deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
}

/// Incoming skill lists get the same cleanup as [`ResumeDraft::add_skill`].
fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut skills: Vec<String> = Vec::with_capacity(raw.len());
    for skill in raw {
        let skill = skill.trim();
        if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
            skills.push(skill.to_string());
        }
    }
    Ok(skills)
}

impl ResumeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_template(template: &Template) -> Self {
        let mut draft = Self::new();
        draft.load_template(template);
        draft
    }

    /// Replace the whole draft with `template`'s content. Entries get fresh
    /// ids on every load.
    pub fn load_template(&mut self, template: &Template) {
        let p = &template.personal_info;
        self.personal_info = PersonalInfo {
            full_name: p.full_name.to_string(),
            email: p.email.to_string(),
            phone: p.phone.to_string(),
            location: p.location.to_string(),
            summary: p.summary.to_string(),
        };
        self.experiences = template
            .experiences
            .iter()
            .map(|e| Experience {
                id: EntryId::new(),
                company: e.company.to_string(),
                position: e.position.to_string(),
                duration: e.duration.to_string(),
                description: e.description.to_string(),
            })
            .collect();
        self.education = template
            .education
            .iter()
            .map(|e| Education {
                id: EntryId::new(),
                school: e.school.to_string(),
                degree: e.degree.to_string(),
                year: e.year.to_string(),
            })
            .collect();
        self.skills = template.skills.iter().map(|s| s.to_string()).collect();
    }

    pub fn add_experience(&mut self) -> EntryId {
        let entry = Experience::default();
        let id = entry.id;
        self.experiences.push(entry);
        id
    }

    pub fn add_education(&mut self) -> EntryId {
        let entry = Education::default();
        let id = entry.id;
        self.education.push(entry);
        id
    }

    pub fn update_personal(&mut self, field: PersonalField, value: &str) {
        let p = &mut self.personal_info;
        let slot = match field {
            PersonalField::FullName => &mut p.full_name,
            PersonalField::Email => &mut p.email,
            PersonalField::Phone => &mut p.phone,
            PersonalField::Location => &mut p.location,
            PersonalField::Summary => &mut p.summary,
        };
        *slot = value.to_string();
    }

    pub fn update_experience(&mut self, id: EntryId, field: ExperienceField, value: &str) {
        let Some(entry) = self.experiences.iter_mut().find(|e| e.id == id) else {
            return;
        };
        let slot = match field {
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Position => &mut entry.position,
            ExperienceField::Duration => &mut entry.duration,
            ExperienceField::Description => &mut entry.description,
        };
        *slot = value.to_string();
    }

    pub fn update_education(&mut self, id: EntryId, field: EducationField, value: &str) {
        let Some(entry) = self.education.iter_mut().find(|e| e.id == id) else {
            return;
        };
        let slot = match field {
            EducationField::School => &mut entry.school,
            EducationField::Degree => &mut entry.degree,
            EducationField::Year => &mut entry.year,
        };
        *slot = value.to_string();
    }

    /// String-keyed update for whichever list holds `id`.
    ///
    /// Unknown ids and field names are ignored.
    pub fn update_field(&mut self, id: EntryId, field: &str, value: &str) {
        if self.experiences.iter().any(|e| e.id == id) {
            if let Ok(field) = field.parse() {
                self.update_experience(id, field, value);
            }
        } else if self.education.iter().any(|e| e.id == id) {
            if let Ok(field) = field.parse() {
                self.update_education(id, field, value);
            }
        }
    }

    /// Remove the entry with `id` from whichever list holds it.
    pub fn remove_entry(&mut self, id: EntryId) {
        self.experiences.retain(|e| e.id != id);
        self.education.retain(|e| e.id != id);
    }

    /// Append a skill. Returns false for blank input or an exact duplicate.
    pub fn add_skill(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.skills.iter().any(|s| s == name) {
            return false;
        }
        self.skills.push(name.to_string());
        true
    }

    pub fn remove_skill(&mut self, name: &str) {
        self.skills.retain(|s| s != name);
    }

    /// Required parts that are still blank or empty, in display order.
    pub fn missing_sections(&self) -> Vec<RequiredPart> {
        let p = &self.personal_info;
        let checks = [
            (RequiredPart::FullName, !p.full_name.trim().is_empty()),
            (RequiredPart::Email, !p.email.trim().is_empty()),
            (RequiredPart::Phone, !p.phone.trim().is_empty()),
            (RequiredPart::Location, !p.location.trim().is_empty()),
            (RequiredPart::Summary, !p.summary.trim().is_empty()),
            (RequiredPart::Experience, !self.experiences.is_empty()),
            (RequiredPart::Education, !self.education.is_empty()),
            (
                RequiredPart::Skills,
                self.skills.iter().any(|s| !s.trim().is_empty()),
            ),
        ];
        checks
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(part, _)| part)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_sections().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::templates;

    fn complete() -> ResumeDraft {
        let mut draft = ResumeDraft::new();
        draft.update_personal(PersonalField::FullName, "Ada Lovelace");
        draft.update_personal(PersonalField::Email, "ada@example.com");
        draft.update_personal(PersonalField::Phone, "555-0100");
        draft.update_personal(PersonalField::Location, "London");
        draft.update_personal(PersonalField::Summary, "Mathematician.");
        draft.add_experience();
        draft.add_education();
        draft.add_skill("Analysis");
        draft
    }

    #[test]
    fn test_each_required_field_blocks_completion() {
        assert!(complete().is_complete());

        for field in [
            PersonalField::FullName,
            PersonalField::Email,
            PersonalField::Phone,
            PersonalField::Location,
            PersonalField::Summary,
        ] {
            let mut draft = complete();
            draft.update_personal(field, "   ");
            assert!(!draft.is_complete(), "{:?} blank should be incomplete", field);
            assert_eq!(draft.missing_sections().len(), 1);
        }

        let mut draft = complete();
        draft.experiences.clear();
        assert_eq!(draft.missing_sections(), vec![RequiredPart::Experience]);

        let mut draft = complete();
        draft.education.clear();
        assert_eq!(draft.missing_sections(), vec![RequiredPart::Education]);

        let mut draft = complete();
        draft.remove_skill("Analysis");
        assert_eq!(draft.missing_sections(), vec![RequiredPart::Skills]);
    }

    #[test]
    fn test_add_skill_trims_and_dedups() {
        let mut draft = ResumeDraft::new();
        assert!(draft.add_skill("  Rust "));
        assert!(!draft.add_skill("Rust"));
        assert!(!draft.add_skill("   "));
        assert!(draft.add_skill("rust"));
        assert_eq!(draft.skills, vec!["Rust", "rust"]);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut draft = complete();
        let before = draft.clone();
        draft.update_experience(EntryId::new(), ExperienceField::Company, "X");
        draft.update_education(EntryId::new(), EducationField::School, "X");
        draft.update_field(EntryId::new(), "company", "X");
        draft.remove_entry(EntryId::new());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_update_field_resolves_list() {
        let mut draft = ResumeDraft::new();
        let exp = draft.add_experience();
        let edu = draft.add_education();

        draft.update_field(exp, "company", "Analytical Engines Ltd");
        draft.update_field(edu, "school", "Home");
        draft.update_field(edu, "company", "ignored");

        assert_eq!(draft.experiences[0].company, "Analytical Engines Ltd");
        assert_eq!(draft.education[0].school, "Home");
    }

    #[test]
    fn test_remove_entry() {
        let mut draft = ResumeDraft::new();
        let a = draft.add_experience();
        let b = draft.add_experience();
        let c = draft.add_education();
        draft.remove_entry(a);
        draft.remove_entry(c);
        assert_eq!(draft.experiences.len(), 1);
        assert_eq!(draft.experiences[0].id, b);
        assert!(draft.education.is_empty());
    }

    #[test]
    fn test_template_loads_fresh_ids() {
        let template = templates::find("software-developer").unwrap();
        let a = ResumeDraft::from_template(template);
        let b = ResumeDraft::from_template(template);

        assert!(a.is_complete());
        assert_eq!(a.personal_info.full_name, "Alex Johnson");
        assert_eq!(a.experiences.len(), 2);
        assert_ne!(a.experiences[0].id, b.experiences[0].id);
        assert_ne!(a.experiences[0].id, a.experiences[1].id);
    }

    #[test]
    fn test_load_template_replaces_everything() {
        let mut draft = complete();
        draft.add_skill("Unrelated");
        draft.load_template(templates::find("chef").unwrap());
        assert!(!draft.skills.contains(&"Unrelated".to_string()));
        assert_eq!(draft.personal_info.full_name, "Isabella Martinez");
    }

    #[test]
    fn test_draft_without_ids_deserializes() {
        let draft: ResumeDraft = serde_json::from_value(serde_json::json!({
            "personalInfo": { "fullName": "Ada" },
            "experiences": [{ "company": "Acme" }],
            "skills": ["Rust"]
        }))
        .unwrap();
        assert_eq!(draft.experiences[0].company, "Acme");
        assert!(draft.education.is_empty());
    }

    #[test]
    fn test_blank_skills_do_not_count() {
        let mut draft = ResumeDraft::from_template(templates::find("chef").unwrap());
        draft.skills = vec!["   ".to_string()];
        assert!(!draft.is_complete());
        assert_eq!(draft.missing_sections(), vec![RequiredPart::Skills]);

        let mut value = serde_json::to_value(ResumeDraft::from_template(
            templates::find("chef").unwrap(),
        ))
        .unwrap();
        value["skills"] = serde_json::json!(["   ", " Plating ", "Plating", ""]);
        let draft: ResumeDraft = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(draft.skills, vec!["Plating"]);
        assert!(draft.is_complete());

        value["skills"] = serde_json::json!(["  ", "\t"]);
        let draft: ResumeDraft = serde_json::from_value(value).unwrap();
        assert!(draft.skills.is_empty());
        assert!(!draft.is_complete());
    }
}
