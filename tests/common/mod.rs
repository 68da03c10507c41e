#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

pub const STANDARDS_JSON: &str = r#"{
    "persian_font": "Nazanin",
    "english_font": "Times New Roman",
    "font_size": 12,
    "line_spacing": 1.5
}"#;

/// Temporary directory holding generated DOCX and standards files.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a DOCX package containing `word/document.xml` with `body`
    /// plus any extra `(part name, xml)` entries.
    pub fn docx(&self, name: &str, body: &str, extra_parts: &[(&str, String)]) -> PathBuf {
        let path = self.path(name);
        let file = fs::File::create(&path).expect("Failed to create docx");
        let mut zip = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(document_xml(body).as_bytes()).unwrap();
        for (part, xml) in extra_parts {
            zip.start_file(*part, options).unwrap();
            zip.write_all(xml.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }
}

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{WML_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

pub fn styles_xml(inner: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="UTF-8"?><w:styles xmlns:w="{WML_NS}">{inner}</w:styles>"#)
}

pub fn theme_xml(major: &str, minor: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<a:theme xmlns:a="{DML_NS}"><a:themeElements><a:fontScheme name="Office">
<a:majorFont><a:latin typeface="{major}"/></a:majorFont>
<a:minorFont><a:latin typeface="{minor}"/></a:minorFont>
</a:fontScheme></a:themeElements></a:theme>"#
    )
}

/// A run with optional direct font and size (in points).
pub fn run(text: &str, font: Option<&str>, size: Option<f64>) -> String {
    let mut rpr = String::new();
    if let Some(font) = font {
        rpr.push_str(&format!(r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}"/>"#));
    }
    if let Some(size) = size {
        rpr.push_str(&format!(r#"<w:sz w:val="{}"/>"#, size * 2.0));
    }
    let rpr = if rpr.is_empty() {
        String::new()
    } else {
        format!("<w:rPr>{rpr}</w:rPr>")
    };
    format!(r#"<w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r>"#)
}

pub fn para(ppr: &str, runs: &[String]) -> String {
    let ppr = if ppr.is_empty() {
        String::new()
    } else {
        format!("<w:pPr>{ppr}</w:pPr>")
    };
    format!("<w:p>{ppr}{}</w:p>", runs.concat())
}
