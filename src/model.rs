//! Paragraph-level view of a word-processing document.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Line spacing as written in `w:spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineSpacing {
    /// Multiple of single spacing (`w:line / 240`).
    Multiple(f64),
    /// Fixed line height in points.
    Exact(f64),
    /// Minimum line height in points.
    AtLeast(f64),
}

impl LineSpacing {
    pub fn value(self) -> f64 {
        match self {
            LineSpacing::Multiple(v) | LineSpacing::Exact(v) | LineSpacing::AtLeast(v) => v,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub runs: Vec<Run>,
    pub alignment: Option<Alignment>, // None = not set on the paragraph
    pub line_spacing: Option<LineSpacing>,
}

impl Paragraph {
    /// Builds a paragraph whose text is the concatenation of `runs`.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let text = runs.iter().map(|r| r.text.as_str()).collect();
        Paragraph {
            text,
            runs,
            alignment: None,
            line_spacing: None,
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn spaced(mut self, line_spacing: LineSpacing) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub font_name: Option<String>,
    pub font_size: Option<f64>, // points
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            font_name: None,
            font_size: None,
        }
    }

    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn size(mut self, points: f64) -> Self {
        self.font_size = Some(points);
        self
    }
}
