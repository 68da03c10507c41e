use std::fmt;

use serde::Serialize;

use crate::model::{Alignment, Document, Paragraph};
use crate::script::Script;
use crate::standards::Standards;

/// Largest absolute difference still treated as equal for sizes and spacing.
pub const TOLERANCE: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Font,
    Size,
    LineSpacing,
}

/// One paragraph attribute that does not match the standards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mismatch {
    /// 1-based, counting every body paragraph.
    pub paragraph: usize,
    pub attribute: Attribute,
    pub script: Script,
    pub expected: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.script {
            Script::Persian => "Persian ",
            Script::Default => "",
        };
        let n = self.paragraph;
        let expected = &self.expected;
        match self.attribute {
            Attribute::Font => write!(f, "Font in {scope}paragraph {n} is not {expected}"),
            Attribute::Size => write!(f, "Text size in {scope}paragraph {n} is not {expected} pt"),
            Attribute::LineSpacing => {
                write!(f, "Line spacing in {scope}paragraph {n} is not {expected}")
            }
        }
    }
}

pub fn check(doc: &Document, standards: &Standards) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for (index, para) in doc.paragraphs.iter().enumerate() {
        let number = index + 1;
        if para.runs.is_empty() {
            log::trace!("paragraph {number}: no runs, skipped");
            continue;
        }

        let script = Script::of(&para.text);
        log::debug!("paragraph {number}: {script:?}, {} runs", para.runs.len());

        let mismatch = |attribute, expected: String| Mismatch {
            paragraph: number,
            attribute,
            script,
            expected,
        };

        let font = standards.font_for(script);
        if !uses_font(para, font) {
            mismatches.push(mismatch(Attribute::Font, font.to_string()));
        }

        if let Some(size) = mean_font_size(para)
            && !within_tolerance(size, standards.font_size)
        {
            log::debug!("paragraph {number}: mean size {size}pt");
            mismatches.push(mismatch(Attribute::Size, standards.font_size.to_string()));
        }

        // Explicitly left-aligned paragraphs are never spacing-checked.
        if para.alignment != Some(Alignment::Left)
            && let Some(spacing) = para.line_spacing
            && !within_tolerance(spacing.value(), standards.line_spacing)
        {
            log::debug!("paragraph {number}: line spacing {spacing:?}");
            mismatches.push(mismatch(
                Attribute::LineSpacing,
                standards.line_spacing.to_string(),
            ));
        }
    }

    mismatches
}

fn uses_font(para: &Paragraph, font: &str) -> bool {
    let wanted = font.to_lowercase();
    para.runs
        .iter()
        .filter_map(|r| r.font_name.as_deref())
        .filter(|name| !name.is_empty())
        .any(|name| name.to_lowercase() == wanted)
}

fn mean_font_size(para: &Paragraph) -> Option<f64> {
    let sizes: Vec<f64> = para
        .runs
        .iter()
        .filter_map(|r| r.font_size)
        .filter(|&pt| pt != 0.0)
        .collect();
    if sizes.is_empty() {
        return None;
    }
    Some(sizes.iter().sum::<f64>() / sizes.len() as f64)
}

fn within_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= TOLERANCE
}
