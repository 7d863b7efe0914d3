// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume export: validate, render, and encode as a downloadable document.

use super::draft::ResumeDraft;
use super::metrics::FontFace;
use super::render::{self, Element, Surface, Theme};
use crate::error::{AppError, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::sync::Arc;

/// A4 in PDF points.
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;

pub const INCOMPLETE_MESSAGE: &str = "Please fill in all required fields (Personal Info, Experience, Education, and Skills) before downloading.";

/// Surface in, document bytes out.
pub trait DocumentExporter: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn export(&self, surface: &Surface) -> Result<Vec<u8>>;
}

/// Writes surfaces as PDF using the standard 14 fonts.
///
/// The surface is scaled to A4 width; the scaled height is split across as
/// many A4 pages as it needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

/// Top margin, in points, for lines pushed onto a following page.
const CONTINUATION_MARGIN_PT: f32 = 36.0;

/// Where one surface element lands in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page: usize,
    /// Subtract from the element's scaled surface y to get its y on `page`,
    /// measured down from the page top.
    pub shift: f32,
}

/// Lower extent of an element, for deciding whether it fits on a page.
fn bottom(element: &Element) -> f32 {
    match element {
        // Descenders reach roughly a quarter em below the baseline
        Element::Text(run) => run.baseline + run.size * 0.25,
        Element::Rule(rule) => rule.y + rule.thickness,
    }
}

/// Assign every element to an A4 page once the surface is scaled to page
/// width. An element that would cross a page boundary moves to the top of
/// the next page, along with everything below it.
pub fn paginate(surface: &Surface) -> (Vec<Placement>, usize) {
    let scale = A4_WIDTH_PT / surface.width;
    let mut order: Vec<usize> = (0..surface.elements.len()).collect();
    order.sort_by(|&a, &b| {
        surface.elements[a]
            .top()
            .total_cmp(&surface.elements[b].top())
    });

    let mut placements = vec![Placement { page: 0, shift: 0.0 }; surface.elements.len()];
    let mut carry = 0.0_f32;
    let mut pages = 1;
    for index in order {
        let element = &surface.elements[index];
        let top = element.top() * scale + carry;
        let height = (bottom(element) - element.top()) * scale;
        let mut page = (top / A4_HEIGHT_PT).floor().max(0.0) as usize;

        let page_end = (page + 1) as f32 * A4_HEIGHT_PT;
        if top + height > page_end && height < A4_HEIGHT_PT - CONTINUATION_MARGIN_PT {
            carry += page_end + CONTINUATION_MARGIN_PT - top;
            page += 1;
        }

        placements[index] = Placement {
            page,
            shift: page as f32 * A4_HEIGHT_PT - carry,
        };
        pages = pages.max(page + 1);
    }
    (placements, pages)
}

/// Number of A4 pages a surface occupies once scaled to page width.
pub fn page_count(surface: &Surface) -> usize {
    paginate(surface).1
}

/// WinAnsi codes 0x80-0x9F; the rest of the upper half matches Latin-1.
#[rustfmt::skip]
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80), ('\u{201A}', 0x82), ('\u{0192}', 0x83), ('\u{201E}', 0x84),
    ('\u{2026}', 0x85), ('\u{2020}', 0x86), ('\u{2021}', 0x87), ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89), ('\u{0160}', 0x8A), ('\u{2039}', 0x8B), ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E), ('\u{2018}', 0x91), ('\u{2019}', 0x92), ('\u{201C}', 0x93),
    ('\u{201D}', 0x94), ('\u{2022}', 0x95), ('\u{2013}', 0x96), ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98), ('\u{2122}', 0x99), ('\u{0161}', 0x9A), ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C), ('\u{017E}', 0x9E), ('\u{0178}', 0x9F),
];

/// Encode `text` for a WinAnsi simple font, with `?` for anything it lacks.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ if c.is_whitespace() => b' ',
            _ => WIN_ANSI_HIGH
                .iter()
                .find(|(ch, _)| *ch == c)
                .map_or(b'?', |(_, byte)| *byte),
        })
        .collect()
}

fn pdf_error(e: impl std::fmt::Display) -> AppError {
    AppError::Export(e.to_string())
}

impl DocumentExporter for PdfExporter {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn export(&self, surface: &Surface) -> Result<Vec<u8>> {
        let scale = A4_WIDTH_PT / surface.width;

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // One font resource per face actually used, named F1, F2, ...
        let mut fonts: HashMap<FontFace, (String, ObjectId)> = HashMap::new();
        let mut font_dict = Dictionary::new();
        for element in &surface.elements {
            if let Element::Text(run) = element {
                if !fonts.contains_key(&run.face) {
                    let name = format!("F{}", fonts.len() + 1);
                    let id = doc.add_object(dictionary! {
                        "Type" => "Font",
                        "Subtype" => "Type1",
                        "BaseFont" => run.face.base_font(),
                        "Encoding" => "WinAnsiEncoding",
                    });
                    font_dict.set(name.as_bytes().to_vec(), id);
                    fonts.insert(run.face, (name, id));
                }
            }
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        let (placements, pages) = paginate(surface);
        let mut operations: Vec<Vec<Operation>> = (0..pages).map(|_| Vec::new()).collect();
        for (element, placement) in surface.elements.iter().zip(&placements) {
            let offset = placement.shift;
            let ops = &mut operations[placement.page];

            match element {
                Element::Text(run) => {
                    let Some((font_name, _)) = fonts.get(&run.face) else {
                        continue;
                    };
                    let x = run.x * scale;
                    let y = A4_HEIGHT_PT - (run.baseline * scale - offset);
                    ops.push(Operation::new(
                        "rg",
                        vec![run.color.r.into(), run.color.g.into(), run.color.b.into()],
                    ));
                    ops.push(Operation::new("BT", vec![]));
                    ops.push(Operation::new(
                        "Tf",
                        vec![font_name.as_str().into(), (run.size * scale).into()],
                    ));
                    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
                    ops.push(Operation::new(
                        "Tj",
                        vec![Object::string_literal(encode_win_ansi(&run.text))],
                    ));
                    ops.push(Operation::new("ET", vec![]));
                }
                Element::Rule(rule) => {
                    let height = (rule.thickness * scale).max(0.25);
                    let y = A4_HEIGHT_PT - (rule.y * scale - offset) - height;
                    ops.push(Operation::new(
                        "rg",
                        vec![rule.color.r.into(), rule.color.g.into(), rule.color.b.into()],
                    ));
                    ops.push(Operation::new(
                        "re",
                        vec![
                            (rule.x * scale).into(),
                            y.into(),
                            (rule.width * scale).into(),
                            height.into(),
                        ],
                    ));
                    ops.push(Operation::new("f", vec![]));
                }
            }
        }

        let mut kids = Vec::with_capacity(pages);
        for ops in operations {
            let content = Content { operations: ops };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().map_err(pdf_error)?,
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::from(page_id));
        }

        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            A4_WIDTH_PT.into(),
            A4_HEIGHT_PT.into(),
        ];
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(pdf_error)?;
        Ok(bytes)
    }
}

/// An exported resume ready for download.
#[derive(Debug, Clone)]
pub struct ResumeArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// `"{name}-Resume.{ext}"`, with path separators and control characters
/// removed from the name.
pub fn artifact_file_name(full_name: &str, extension: &str) -> String {
    let cleaned: String = full_name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\') && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        format!("Resume.{}", extension)
    } else {
        format!("{}-Resume.{}", cleaned, extension)
    }
}

/// Validates drafts and hands rendered surfaces to a [`DocumentExporter`].
#[derive(Clone)]
pub struct ResumeEngine {
    exporter: Arc<dyn DocumentExporter>,
}

impl Default for ResumeEngine {
    fn default() -> Self {
        Self::new(Arc::new(PdfExporter))
    }
}

impl ResumeEngine {
    pub fn new(exporter: Arc<dyn DocumentExporter>) -> Self {
        Self { exporter }
    }

    /// Export a complete draft.
    ///
    /// An incomplete draft fails with [`AppError::Validation`] before
    /// anything is rendered.
    pub fn export(&self, draft: &ResumeDraft, theme: Theme) -> Result<ResumeArtifact> {
        let missing = draft.missing_sections();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Refusing to export incomplete resume");
            return Err(AppError::Validation(INCOMPLETE_MESSAGE.to_string()));
        }

        let surface = render::render(draft, theme);
        let bytes = self.exporter.export(&surface)?;

        tracing::info!(
            theme = theme.as_str(),
            pages = page_count(&surface),
            size = bytes.len(),
            "Exported resume"
        );

        Ok(ResumeArtifact {
            file_name: artifact_file_name(&draft.personal_info.full_name, self.exporter.extension()),
            content_type: self.exporter.content_type(),
            bytes,
        })
    }
}
