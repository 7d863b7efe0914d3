// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume assembly: drafts, built-in templates, layout and export.

pub mod draft;
pub mod export;
pub mod json_resume;
pub mod metrics;
pub mod render;
pub mod templates;

pub use draft::{
    Education, EducationField, EntryId, Experience, ExperienceField, PersonalField, PersonalInfo,
    RequiredPart, ResumeDraft,
};
pub use export::{DocumentExporter, PdfExporter, ResumeArtifact, ResumeEngine};
pub use json_resume::JsonResume;
pub use render::{Surface, Theme};
pub use templates::{Template, TemplateSummary};
