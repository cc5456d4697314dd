use std::path::Path;

/// Rich document formats handled by the document ingestion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
}

/// Every file type the upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Document(DocumentFormat),
    Csv,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match normalize_extension(extension).as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "xls" => Some(Self::Xls),
            "xlsx" => Some(Self::Xlsx),
            "ppt" => Some(Self::Ppt),
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
        }
    }
}

impl FileKind {
    /// Accepts `"csv"`, `".CSV"` and similar; anything outside the allow-list is `None`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if normalize_extension(extension) == "csv" {
            return Some(Self::Csv);
        }
        DocumentFormat::from_extension(extension).map(Self::Document)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Document(format) => format.as_extension(),
            Self::Csv => "csv",
        }
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}
