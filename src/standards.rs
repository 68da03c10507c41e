use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::script::Script;

/// Target formatting a document is checked against.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Standards {
    pub persian_font: String,
    pub english_font: String,
    /// Points.
    pub font_size: f64,
    pub line_spacing: f64,
}

impl Standards {
    pub fn load(path: &Path) -> Result<Standards, Error> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Standards::from_json(&json)
            .map_err(|e| match e {
                Error::Config(reason) => Error::Config(format!("{}: {reason}", path.display())),
                other => other,
            })
    }

    pub fn from_json(json: &str) -> Result<Standards, Error> {
        let standards: Standards =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        standards.validate()?;
        log::debug!("loaded standards: {standards:?}");
        Ok(standards)
    }

    pub fn font_for(&self, script: Script) -> &str {
        match script {
            Script::Persian => &self.persian_font,
            Script::Default => &self.english_font,
        }
    }

    fn validate(&self) -> Result<(), Error> {
        for (key, font) in [("persian_font", &self.persian_font), ("english_font", &self.english_font)] {
            if font.trim().is_empty() {
                return Err(Error::Config(format!("`{key}` must not be empty")));
            }
        }
        for (key, value) in [("font_size", self.font_size), ("line_spacing", self.line_spacing)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!("`{key}` must be a positive number, got {value}")));
            }
        }
        Ok(())
    }
}
