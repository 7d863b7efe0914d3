// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lays a draft out onto a fixed-width visual surface.
//!
//! The surface is the printable preview: styled text runs and horizontal
//! rules positioned in logical pixels from the top-left corner. Its width
//! is fixed at [`SURFACE_WIDTH`]; its height follows the content.

use super::draft::ResumeDraft;
use super::metrics::{FontFace, FontFamily};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// Logical width of the preview (A4 at 96 dpi).
pub const SURFACE_WIDTH: f32 = 794.0;
const MARGIN: f32 = 56.0;
const CONTENT_WIDTH: f32 = SURFACE_WIDTH - 2.0 * MARGIN;
const LINE_SPACING: f32 = 1.35;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Flat,
    Elegant,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Flat, Theme::Elegant];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Flat => "flat",
            Theme::Elegant => "elegant",
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown theme '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub baseline: f32,
    pub text: String,
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Rule(Rule),
}

impl Element {
    /// Topmost extent of the element.
    pub fn top(&self) -> f32 {
        match self {
            Element::Text(run) => run.baseline - run.size,
            Element::Rule(rule) => rule.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

impl Surface {
    /// All text on the surface, one run per line.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run.text.as_str()),
            Element::Rule(_) => None,
        })
    }
}

struct Style {
    family: FontFamily,
    text: Color,
    muted: Color,
    accent: Color,
    centered_header: bool,
    uppercase_sections: bool,
    name_size: f32,
    section_size: f32,
    body_size: f32,
    contact_separator: &'static str,
    skill_separator: &'static str,
}

impl Style {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Flat => Style {
                family: FontFamily::Helvetica,
                text: Color::rgb(17, 24, 39),
                muted: Color::rgb(107, 114, 128),
                accent: Color::rgb(37, 99, 235),
                centered_header: false,
                uppercase_sections: true,
                name_size: 30.0,
                section_size: 14.0,
                body_size: 13.0,
                contact_separator: "  |  ",
                skill_separator: ", ",
            },
            Theme::Elegant => Style {
                family: FontFamily::Times,
                text: Color::rgb(28, 25, 23),
                muted: Color::rgb(120, 113, 108),
                accent: Color::rgb(127, 94, 40),
                centered_header: true,
                uppercase_sections: false,
                name_size: 34.0,
                section_size: 18.0,
                body_size: 14.0,
                contact_separator: "  \u{b7}  ",
                skill_separator: "  \u{b7}  ",
            },
        }
    }

    fn regular(&self) -> FontFace {
        FontFace::regular(self.family)
    }

    fn bold(&self) -> FontFace {
        FontFace::bold(self.family)
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// One word for the line-fitting algorithm.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    width: f64,
    space: f64,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.space
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Split a word wider than `max` into chunks that fit.
fn split_long_word(word: &str, face: FontFace, size: f32, max: f32) -> Vec<&str> {
    if face.measure(word, size) <= max {
        return vec![word];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    let mut width = 0.0;
    for (i, c) in word.char_indices() {
        let w = face.measure(c.encode_utf8(&mut [0u8; 4]), size);
        if width + w > max && i > start {
            parts.push(&word[start..i]);
            start = i;
            width = 0.0;
        }
        width += w;
    }
    parts.push(&word[start..]);
    parts
}

/// Break `text` into lines no wider than `max_width`. Explicit newlines
/// start a new line; blank lines are dropped.
pub fn wrap_text(text: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let space = face.measure(" ", size) as f64;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let words: Vec<Word> = paragraph
            .split_whitespace()
            .flat_map(|w| split_long_word(w, face, size, max_width))
            .map(|w| Word {
                text: w,
                width: face.measure(w, size) as f64,
                space,
            })
            .collect();
        if words.is_empty() {
            continue;
        }

        for line in wrap_first_fit(&words, &[max_width as f64]) {
            lines.push(
                line.iter()
                    .map(|w| w.text)
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
    }
    lines
}

struct Layout {
    style: Style,
    cursor: f32,
    elements: Vec<Element>,
}

impl Layout {
    fn new(theme: Theme) -> Self {
        Self {
            style: Style::for_theme(theme),
            cursor: MARGIN,
            elements: Vec::new(),
        }
    }

    fn gap(&mut self, px: f32) {
        self.cursor += px;
    }

    fn push_line(&mut self, text: String, x: f32, face: FontFace, size: f32, color: Color) {
        self.elements.push(Element::Text(TextRun {
            x,
            baseline: self.cursor + size,
            text,
            face,
            size,
            color,
        }));
    }

    /// Wrapped text advancing the cursor.
    fn paragraph(&mut self, text: &str, face: FontFace, size: f32, color: Color, align: Align) {
        for line in wrap_text(text, face, size, CONTENT_WIDTH) {
            let x = match align {
                Align::Left => MARGIN,
                Align::Center => MARGIN + (CONTENT_WIDTH - face.measure(&line, size)) / 2.0,
            };
            self.push_line(line, x, face, size, color);
            self.cursor += size * LINE_SPACING;
        }
    }

    /// Left text with a right-aligned annotation on the first line.
    fn split_line(&mut self, left: &str, right: &str, left_face: FontFace, size: f32, left_color: Color) {
        let right_face = self.style.regular();
        let right_width = if right.is_empty() {
            0.0
        } else {
            right_face.measure(right, size)
        };
        let left_max = (CONTENT_WIDTH - right_width - 16.0).max(CONTENT_WIDTH / 2.0);

        let lines = wrap_text(left, left_face, size, left_max);
        if !right.is_empty() {
            let x = MARGIN + CONTENT_WIDTH - right_width;
            let muted = self.style.muted;
            self.push_line(right.to_string(), x, right_face, size, muted);
        }
        if lines.is_empty() && !right.is_empty() {
            self.cursor += size * LINE_SPACING;
        }
        for line in lines {
            self.push_line(line, MARGIN, left_face, size, left_color);
            self.cursor += size * LINE_SPACING;
        }
    }

    fn rule(&mut self, thickness: f32, color: Color) {
        self.elements.push(Element::Rule(Rule {
            x: MARGIN,
            y: self.cursor,
            width: CONTENT_WIDTH,
            thickness,
            color,
        }));
        self.cursor += thickness;
    }

    fn section(&mut self, title: &str) {
        self.gap(18.0);
        let title = if self.style.uppercase_sections {
            title.to_uppercase()
        } else {
            title.to_string()
        };
        let (face, size, accent) = (self.style.bold(), self.style.section_size, self.style.accent);
        self.paragraph(&title, face, size, accent, Align::Left);
        self.gap(-2.0);
        self.rule(1.0, accent);
        self.gap(8.0);
    }

    fn finish(self) -> Surface {
        Surface {
            width: SURFACE_WIDTH,
            height: self.cursor + MARGIN,
            elements: self.elements,
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Render `draft` in `theme`.
///
/// Section order: header and contact block, summary (when present),
/// experience in stored order, education, skills.
pub fn render(draft: &ResumeDraft, theme: Theme) -> Surface {
    let mut layout = Layout::new(theme);
    let p = &draft.personal_info;
    let header_align = if layout.style.centered_header {
        Align::Center
    } else {
        Align::Left
    };
    let (regular, bold) = (layout.style.regular(), layout.style.bold());
    let (text, muted, accent) = (layout.style.text, layout.style.muted, layout.style.accent);
    let body = layout.style.body_size;

    if let Some(name) = non_blank(&p.full_name) {
        let size = layout.style.name_size;
        layout.paragraph(name, bold, size, text, header_align);
    }

    let contact: Vec<&str> = [&p.email, &p.phone, &p.location]
        .into_iter()
        .filter_map(|s| non_blank(s))
        .collect();
    if !contact.is_empty() {
        let line = contact.join(layout.style.contact_separator);
        layout.gap(4.0);
        layout.paragraph(&line, regular, body, muted, header_align);
    }

    layout.gap(6.0);
    match theme {
        Theme::Flat => layout.rule(2.0, accent),
        Theme::Elegant => {
            layout.rule(0.75, muted);
            layout.gap(2.0);
            layout.rule(0.75, muted);
        }
    }

    if let Some(summary) = non_blank(&p.summary) {
        layout.section("Professional Summary");
        layout.paragraph(summary, regular, body, text, Align::Left);
    }

    if !draft.experiences.is_empty() {
        layout.section("Experience");
        for (i, exp) in draft.experiences.iter().enumerate() {
            if i > 0 {
                layout.gap(10.0);
            }
            layout.split_line(exp.position.trim(), exp.duration.trim(), bold, body + 1.0, text);
            if let Some(company) = non_blank(&exp.company) {
                layout.paragraph(company, regular, body, accent, Align::Left);
            }
            if let Some(description) = non_blank(&exp.description) {
                layout.gap(2.0);
                layout.paragraph(description, regular, body, text, Align::Left);
            }
        }
    }

    if !draft.education.is_empty() {
        layout.section("Education");
        for (i, edu) in draft.education.iter().enumerate() {
            if i > 0 {
                layout.gap(8.0);
            }
            layout.split_line(edu.degree.trim(), edu.year.trim(), bold, body + 1.0, text);
            if let Some(school) = non_blank(&edu.school) {
                layout.paragraph(school, regular, body, accent, Align::Left);
            }
        }
    }

    if !draft.skills.is_empty() {
        layout.section("Skills");
        let skills = draft.skills.join(layout.style.skill_separator);
        layout.paragraph(&skills, regular, body, text, Align::Left);
    }

    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::templates;

    fn sample() -> ResumeDraft {
        ResumeDraft::from_template(templates::find("software-developer").unwrap())
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("flat".parse::<Theme>().unwrap(), Theme::Flat);
        assert_eq!("Elegant".parse::<Theme>().unwrap(), Theme::Elegant);
        assert!(matches!("neon".parse::<Theme>(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_wrap_respects_width() {
        let face = FontFace::regular(FontFamily::Helvetica);
        let text = "Led development of microservices architecture serving 1M+ users.";
        let lines = wrap_text(text, face, 13.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(face.measure(line, 13.0) <= 200.0 + 0.01, "{line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let face = FontFace::regular(FontFamily::Times);
        let word = "x".repeat(200);
        let lines = wrap_text(&word, face, 13.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_section_order() {
        let surface = render(&sample(), Theme::Flat);
        let lines: Vec<&str> = surface.text_lines().collect();
        let pos = |needle: &str| lines.iter().position(|l| *l == needle).unwrap();

        assert_eq!(lines[0], "Alex Johnson");
        assert!(pos("PROFESSIONAL SUMMARY") < pos("EXPERIENCE"));
        assert!(pos("EXPERIENCE") < pos("EDUCATION"));
        assert!(pos("EDUCATION") < pos("SKILLS"));
        assert!(pos("TechCorp Inc.") < pos("StartupXYZ"));
    }

    #[test]
    fn test_blank_summary_omitted() {
        let mut draft = sample();
        draft.personal_info.summary = "  ".into();
        let surface = render(&draft, Theme::Elegant);
        assert!(!surface.text_lines().any(|l| l == "Professional Summary"));
    }

    #[test]
    fn test_height_follows_content() {
        let short = render(&ResumeDraft::new(), Theme::Flat);
        let long = render(&sample(), Theme::Flat);
        assert_eq!(short.width, SURFACE_WIDTH);
        assert_eq!(long.width, SURFACE_WIDTH);
        assert!(long.height > short.height);
        for element in &long.elements {
            assert!(element.top() >= 0.0 && element.top() <= long.height);
        }
    }

    #[test]
    fn test_themes_use_different_fonts() {
        let flat = render(&sample(), Theme::Flat);
        let elegant = render(&sample(), Theme::Elegant);
        let family = |s: &Surface| match &s.elements[0] {
            Element::Text(run) => run.face.family,
            Element::Rule(_) => unreachable!(),
        };
        assert_eq!(family(&flat), FontFamily::Helvetica);
        assert_eq!(family(&elegant), FontFamily::Times);
    }
}
