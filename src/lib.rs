//! Checks the paragraphs of a DOCX file against a formatting standard.
//!
//! Paragraphs containing Persian letters are held to the Persian font, all
//! others to the English font. Font size and line spacing are compared within
//! [`TOLERANCE`].

mod check;
mod docx;
mod error;
pub mod model;
pub mod script;
mod standards;

pub use check::{Attribute, Mismatch, TOLERANCE, check};
pub use docx::{Resolution, parse_reader};
pub use error::Error;
pub use standards::Standards;

use std::path::Path;

use model::Document;

pub fn load_document(input: &Path, resolution: Resolution) -> Result<Document, Error> {
    docx::parse(input, resolution)
}

pub fn check_docx(
    input: &Path,
    standards: &Standards,
    resolution: Resolution,
) -> Result<Vec<Mismatch>, Error> {
    let doc = load_document(input, resolution)?;
    Ok(check(&doc, standards))
}
