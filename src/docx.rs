use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;

use crate::error::Error;
use crate::model::{Alignment, Document, LineSpacing, Paragraph, Run};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

const MAX_STYLE_DEPTH: usize = 16;

/// Which formatting a paragraph or run reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Only formatting written on the paragraph or run itself.
    #[default]
    Direct,
    /// Direct formatting, then paragraph styles (following `w:basedOn`),
    /// then document defaults. Theme font references are resolved.
    Effective,
}

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children().find(|n| is_wml(*n, name))
}

fn is_wml(node: roxmltree::Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

fn wml_attr<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

fn dml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(DML_NS))
}

fn latin_typeface<'a>(node: roxmltree::Node<'a, 'a>) -> Option<&'a str> {
    dml(node, "latin")
        .and_then(|n| n.attribute("typeface"))
        .filter(|tf| !tf.is_empty())
}

fn parse_alignment(val: &str) -> Option<Alignment> {
    match val {
        "left" | "start" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" | "end" => Some(Alignment::Right),
        "both" | "distribute" | "lowKashida" | "mediumKashida" | "highKashida"
        | "thaiDistribute" => Some(Alignment::Justify),
        other => {
            log::debug!("unrecognized w:jc value {other:?}");
            None
        }
    }
}

fn parse_line_spacing(spacing: roxmltree::Node) -> Option<LineSpacing> {
    let line = spacing
        .attribute((WML_NS, "line"))
        .and_then(|v| v.parse::<f64>().ok())?;
    match spacing.attribute((WML_NS, "lineRule")) {
        Some("exact") => Some(LineSpacing::Exact(line / 20.0)),
        Some("atLeast") => Some(LineSpacing::AtLeast(line / 20.0)),
        _ => Some(LineSpacing::Multiple(line / 240.0)),
    }
}

fn half_points(rpr: roxmltree::Node) -> Option<f64> {
    wml_attr(rpr, "sz")
        .and_then(|v| v.parse::<f64>().ok())
        .map(|hp| hp / 2.0)
}

fn read_part<R: Read + Seek>(zip: &mut zip::ZipArchive<R>, name: &str) -> Option<String> {
    let mut file = zip.by_name(name).ok()?;
    let mut xml_content = String::new();
    if let Err(e) = file.read_to_string(&mut xml_content) {
        log::warn!("cannot read {name}: {e}");
        return None;
    }
    Some(xml_content)
}

#[derive(Default)]
struct ThemeFonts {
    major: Option<String>,
    minor: Option<String>,
}

impl ThemeFonts {
    fn resolve(&self, theme_ref: &str) -> Option<String> {
        match theme_ref {
            "majorHAnsi" | "majorAscii" => self.major.clone(),
            "minorHAnsi" | "minorAscii" => self.minor.clone(),
            _ => None,
        }
    }
}

fn parse_theme<R: Read + Seek>(zip: &mut zip::ZipArchive<R>) -> ThemeFonts {
    let mut fonts = ThemeFonts::default();

    let Some(theme_name) = zip
        .file_names()
        .find(|n| n.starts_with("word/theme/") && n.ends_with(".xml"))
        .map(str::to_string)
    else {
        log::debug!("no theme part, theme fonts unresolved");
        return fonts;
    };
    let Some(xml_content) = read_part(zip, &theme_name) else {
        return fonts;
    };
    let xml = match roxmltree::Document::parse(&xml_content) {
        Ok(xml) => xml,
        Err(e) => {
            log::warn!("ignoring malformed {theme_name}: {e}");
            return fonts;
        }
    };

    for node in xml.descendants() {
        if node.tag_name().namespace() != Some(DML_NS) {
            continue;
        }
        match node.tag_name().name() {
            "majorFont" => fonts.major = latin_typeface(node).map(str::to_string),
            "minorFont" => fonts.minor = latin_typeface(node).map(str::to_string),
            _ => {}
        }
    }

    fonts
}

/// Direct `w:ascii` wins over `w:asciiTheme`.
fn rfonts_name(rfonts: roxmltree::Node, theme: &ThemeFonts) -> Option<String> {
    if let Some(name) = rfonts.attribute((WML_NS, "ascii")) {
        return Some(name.to_string());
    }
    rfonts
        .attribute((WML_NS, "asciiTheme"))
        .and_then(|r| theme.resolve(r))
}

#[derive(Default)]
struct Formatting {
    font_size: Option<f64>,
    font_name: Option<String>,
    alignment: Option<Alignment>,
    line_spacing: Option<LineSpacing>,
}

fn parse_formatting(
    ppr: Option<roxmltree::Node>,
    rpr: Option<roxmltree::Node>,
    theme: &ThemeFonts,
) -> Formatting {
    Formatting {
        font_size: rpr.and_then(half_points),
        font_name: rpr
            .and_then(|n| wml(n, "rFonts"))
            .and_then(|n| rfonts_name(n, theme)),
        alignment: ppr.and_then(|n| wml_attr(n, "jc")).and_then(parse_alignment),
        line_spacing: ppr
            .and_then(|n| wml(n, "spacing"))
            .and_then(parse_line_spacing),
    }
}

struct ParagraphStyle {
    based_on: Option<String>,
    formatting: Formatting,
}

#[derive(Default)]
struct StylesInfo {
    defaults: Formatting,
    default_style: Option<String>,
    paragraph_styles: HashMap<String, ParagraphStyle>,
}

impl StylesInfo {
    /// Walks the `w:basedOn` chain from `style_id` (or the default paragraph
    /// style), returning the first value `get` yields, then the document default.
    fn lookup<T>(&self, style_id: Option<&str>, get: impl Fn(&Formatting) -> Option<T>) -> Option<T> {
        let mut current = style_id.or(self.default_style.as_deref());
        for _ in 0..MAX_STYLE_DEPTH {
            let Some(style) = current.and_then(|id| self.paragraph_styles.get(id)) else {
                break;
            };
            if let Some(v) = get(&style.formatting) {
                return Some(v);
            }
            current = style.based_on.as_deref();
        }
        get(&self.defaults)
    }
}

fn parse_styles<R: Read + Seek>(zip: &mut zip::ZipArchive<R>, theme: &ThemeFonts) -> StylesInfo {
    let mut styles = StylesInfo::default();

    let Some(xml_content) = read_part(zip, "word/styles.xml") else {
        log::debug!("no word/styles.xml, only direct formatting available");
        return styles;
    };
    let xml = match roxmltree::Document::parse(&xml_content) {
        Ok(xml) => xml,
        Err(e) => {
            log::warn!("ignoring malformed word/styles.xml: {e}");
            return styles;
        }
    };

    let root = xml.root_element();

    if let Some(doc_defaults) = wml(root, "docDefaults") {
        let rpr = wml(doc_defaults, "rPrDefault").and_then(|n| wml(n, "rPr"));
        let ppr = wml(doc_defaults, "pPrDefault").and_then(|n| wml(n, "pPr"));
        styles.defaults = parse_formatting(ppr, rpr, theme);
    }

    for style_node in root.children() {
        if !is_wml(style_node, "style") {
            continue;
        }
        if style_node.attribute((WML_NS, "type")) != Some("paragraph") {
            continue;
        }
        let Some(style_id) = style_node.attribute((WML_NS, "styleId")) else {
            continue;
        };

        if style_node.attribute((WML_NS, "default")) == Some("1") {
            styles.default_style = Some(style_id.to_string());
        }

        styles.paragraph_styles.insert(
            style_id.to_string(),
            ParagraphStyle {
                based_on: wml_attr(style_node, "basedOn").map(str::to_string),
                formatting: parse_formatting(
                    wml(style_node, "pPr"),
                    wml(style_node, "rPr"),
                    theme,
                ),
            },
        );
    }

    log::debug!(
        "parsed {} paragraph styles, default {:?}",
        styles.paragraph_styles.len(),
        styles.default_style
    );
    styles
}

fn run_text(run_node: roxmltree::Node) -> String {
    let mut text = String::new();
    for child in run_node.children() {
        if child.tag_name().namespace() != Some(WML_NS) {
            continue;
        }
        match child.tag_name().name() {
            "t" => text.push_str(child.text().unwrap_or("")),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }
    text
}

/// Runs directly inside the paragraph plus those inside its hyperlinks.
fn paragraph_text(para_node: roxmltree::Node) -> String {
    let mut text = String::new();
    for child in para_node.children() {
        if is_wml(child, "r") {
            text.push_str(&run_text(child));
        } else if is_wml(child, "hyperlink") {
            for run_node in child.children().filter(|n| is_wml(*n, "r")) {
                text.push_str(&run_text(run_node));
            }
        }
    }
    text
}

pub fn parse(path: &Path, resolution: Resolution) -> Result<Document, Error> {
    let file = std::fs::File::open(path).map_err(|e| Error::from(e).in_document(path))?;
    parse_reader(std::io::BufReader::new(file), resolution).map_err(|e| e.in_document(path))
}

pub fn parse_reader<R: Read + Seek>(reader: R, resolution: Resolution) -> Result<Document, Error> {
    let mut zip = zip::ZipArchive::new(reader)?;

    let (theme, styles) = match resolution {
        Resolution::Direct => (ThemeFonts::default(), StylesInfo::default()),
        Resolution::Effective => {
            let theme = parse_theme(&mut zip);
            let styles = parse_styles(&mut zip, &theme);
            (theme, styles)
        }
    };

    let xml_content = read_part(&mut zip, "word/document.xml")
        .ok_or_else(|| Error::InvalidDocx("missing word/document.xml".into()))?;

    let xml = roxmltree::Document::parse(&xml_content)?;
    let root = xml.root_element();

    let body = wml(root, "body")
        .ok_or_else(|| Error::InvalidDocx("missing w:body".into()))?;

    let mut paragraphs = Vec::new();

    for node in body.children().filter(|n| is_wml(*n, "p")) {
        let ppr = wml(node, "pPr");
        let direct = parse_formatting(ppr, None, &theme);

        let (alignment, line_spacing, style_id) = match resolution {
            Resolution::Direct => (direct.alignment, direct.line_spacing, None),
            Resolution::Effective => {
                let style_id = ppr.and_then(|ppr| wml_attr(ppr, "pStyle"));
                (
                    direct.alignment.or_else(|| styles.lookup(style_id, |f| f.alignment)),
                    direct
                        .line_spacing
                        .or_else(|| styles.lookup(style_id, |f| f.line_spacing)),
                    style_id,
                )
            }
        };

        let mut runs = Vec::new();

        for run_node in node.children().filter(|n| is_wml(*n, "r")) {
            let run = parse_formatting(None, wml(run_node, "rPr"), &theme);

            let (font_name, font_size) = match resolution {
                Resolution::Direct => (run.font_name, run.font_size),
                Resolution::Effective => (
                    run.font_name
                        .or_else(|| styles.lookup(style_id, |f| f.font_name.clone())),
                    run.font_size
                        .or_else(|| styles.lookup(style_id, |f| f.font_size)),
                ),
            };

            runs.push(Run {
                text: run_text(run_node),
                font_name,
                font_size,
            });
        }

        paragraphs.push(Paragraph {
            text: paragraph_text(node),
            runs,
            alignment,
            line_spacing,
        });
    }

    log::debug!("parsed {} body paragraphs ({resolution:?})", paragraphs.len());

    Ok(Document { paragraphs })
}
