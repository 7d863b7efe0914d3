// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion to the JSON Resume schema (<https://jsonresume.org/schema>).

use super::draft::ResumeDraft;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JsonResume {
    pub basics: Basics,
    pub work: Vec<Work>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Basics {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Location,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Location {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Work {
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EducationEntry {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Skill {
    pub name: String,
}

/// Split `"Jan 2022 - Dec 2023"` into start and end. A duration mentioning
/// `Present` has no end date.
fn split_duration(duration: &str) -> (String, Option<String>) {
    let mut parts = duration.split(" - ");
    let start = parts.next().unwrap_or_default().to_string();
    let end = if duration.contains("Present") {
        None
    } else {
        parts.next().map(str::to_string)
    };
    (start, end)
}

impl JsonResume {
    pub fn from_draft(draft: &ResumeDraft) -> Self {
        let p = &draft.personal_info;
        Self {
            basics: Basics {
                name: p.full_name.clone(),
                email: p.email.clone(),
                phone: p.phone.clone(),
                location: Location {
                    address: p.location.clone(),
                },
                summary: p.summary.clone(),
            },
            work: draft
                .experiences
                .iter()
                .map(|exp| {
                    let (start_date, end_date) = split_duration(&exp.duration);
                    Work {
                        company: exp.company.clone(),
                        position: exp.position.clone(),
                        start_date,
                        end_date,
                        summary: exp.description.clone(),
                    }
                })
                .collect(),
            education: draft
                .education
                .iter()
                .map(|edu| EducationEntry {
                    institution: edu.school.clone(),
                    area: edu.degree.clone(),
                    study_type: "Degree".to_string(),
                    end_date: edu.year.clone(),
                })
                .collect(),
            skills: draft
                .skills
                .iter()
                .map(|name| Skill { name: name.clone() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::templates;

    #[test]
    fn test_duration_split() {
        assert_eq!(split_duration("Jan 2022 - Present"), ("Jan 2022".into(), None));
        assert_eq!(
            split_duration("Jun 2020 - Dec 2021"),
            ("Jun 2020".into(), Some("Dec 2021".into()))
        );
        assert_eq!(split_duration("2019"), ("2019".into(), None));
    }

    #[test]
    fn test_from_template() {
        let draft = ResumeDraft::from_template(templates::find("teacher").unwrap());
        let json = serde_json::to_value(JsonResume::from_draft(&draft)).unwrap();

        assert_eq!(json["basics"]["name"], "Michael Chen");
        assert_eq!(json["basics"]["location"]["address"], "Austin, TX");
        assert_eq!(json["work"][0]["startDate"], "Aug 2020");
        assert!(json["work"][0].get("endDate").is_none());
        assert_eq!(json["work"][1]["endDate"], "Jul 2020");
        assert_eq!(json["education"][0]["studyType"], "Degree");
        assert_eq!(json["education"][0]["endDate"], "2016");
        assert_eq!(json["skills"][0]["name"], "Curriculum Development");
    }
}
