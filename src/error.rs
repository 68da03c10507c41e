use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The standards file is missing, unreadable, malformed or out of range.
    Config(String),
    /// Loading the document at `path` failed; `source` is one of the
    /// package-level variants below.
    Document { path: PathBuf, source: Box<Error> },
    /// The package opened but lacks a part or element every document has.
    InvalidDocx(String),
    Zip(zip::result::ZipError),
    Xml(roxmltree::Error),
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn in_document(self, path: impl Into<PathBuf>) -> Error {
        Error::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The underlying failure, looking through the document path wrapper.
    pub fn cause(&self) -> &Error {
        match self {
            Error::Document { source, .. } => source.cause(),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(reason) => write!(f, "invalid formatting standards: {reason}"),
            Error::Document { path, source } => write!(f, "cannot check {}: {source}", path.display()),
            Error::InvalidDocx(reason) => write!(f, "not a WordprocessingML document: {reason}"),
            Error::Zip(e) => write!(f, "unreadable DOCX package: {e}"),
            Error::Xml(e) => write!(f, "malformed document XML: {e}"),
            Error::Io(e) => write!(f, "read failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Document { source, .. } => Some(source.as_ref()),
            Error::Zip(e) => Some(e),
            Error::Xml(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Config(_) | Error::InvalidDocx(_) => None,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
