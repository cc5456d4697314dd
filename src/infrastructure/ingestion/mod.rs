mod csv_ingestion_step;
mod document_ingestion_step;
mod document_reader;
mod docx_reader;
mod ingestion_step_factory;
mod pdf_reader;
mod presentation_reader;
mod spreadsheet_reader;

pub use csv_ingestion_step::CsvIngestionStep;
pub use document_ingestion_step::DocumentIngestionStep;
pub use document_reader::{DocumentReader, TextSpan};
pub use docx_reader::DocxReader;
pub use ingestion_step_factory::IngestionStepFactory;
pub use pdf_reader::{PdfReader, split_paragraphs};
pub use presentation_reader::PresentationReader;
pub use spreadsheet_reader::SpreadsheetReader;
