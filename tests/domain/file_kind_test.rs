use std::path::Path;

use textops::domain::{DocumentFormat, FileKind};

#[test]
fn given_csv_extension_when_parsing_then_returns_csv() {
    assert_eq!(FileKind::from_extension("csv"), Some(FileKind::Csv));
}

#[test]
fn given_dotted_uppercase_extension_when_parsing_then_normalized() {
    assert_eq!(
        FileKind::from_extension(".PDF"),
        Some(FileKind::Document(DocumentFormat::Pdf))
    );
    assert_eq!(
        FileKind::from_extension(" Xlsx "),
        Some(FileKind::Document(DocumentFormat::Xlsx))
    );
}

#[test]
fn given_every_document_extension_when_parsing_then_round_trips() {
    for ext in ["pdf", "docx", "doc", "xls", "xlsx", "ppt", "pptx"] {
        let kind = FileKind::from_extension(ext).unwrap();
        assert_eq!(kind.as_extension(), ext);
    }
}

#[test]
fn given_unknown_extension_when_parsing_then_returns_none() {
    assert_eq!(FileKind::from_extension("xyz"), None);
    assert_eq!(FileKind::from_extension("txt"), None);
    assert_eq!(FileKind::from_extension(""), None);
}

#[test]
fn given_path_when_parsing_then_uses_extension() {
    assert_eq!(
        FileKind::from_path(Path::new("/tmp/upload/report.docx")),
        Some(FileKind::Document(DocumentFormat::Docx))
    );
    assert_eq!(FileKind::from_path(Path::new("/tmp/upload/README")), None);
}
