use std::path::Path;

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use crate::application::ports::IngestionError;
use crate::domain::DocItemLabel;

use super::document_reader::{DocumentReader, TextSpan};

/// Reads Office Open XML word documents. Legacy binary `.doc` files are routed here
/// as well and fail to parse.
#[derive(Debug, Default)]
pub struct DocxReader;

impl DocumentReader for DocxReader {
    fn read(&self, path: &Path) -> Result<Vec<TextSpan>, IngestionError> {
        let data = std::fs::read(path).map_err(|e| IngestionError::conversion_failed(path, e))?;
        let docx = docx_rs::read_docx(&data).map_err(|e| {
            IngestionError::conversion_failed(path, format!("failed to parse word document: {e}"))
        })?;

        let mut spans = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => {
                    spans.push(TextSpan::new(
                        paragraph_label(paragraph),
                        paragraph_text(paragraph),
                    ));
                }
                DocumentChild::Table(table) => spans.extend(
                    table_rows(table)
                        .into_iter()
                        .map(|row| TextSpan::new(DocItemLabel::Table, row)),
                ),
                _ => {}
            }
        }

        Ok(spans)
    }
}

fn paragraph_label(paragraph: &Paragraph) -> DocItemLabel {
    let style = paragraph
        .property
        .style
        .as_ref()
        .map(|s| s.val.to_ascii_lowercase())
        .unwrap_or_default();

    if style == "title" {
        DocItemLabel::Title
    } else if style.starts_with("heading") {
        DocItemLabel::SectionHeader
    } else if paragraph.property.numbering_property.is_some() || style == "listparagraph" {
        DocItemLabel::ListItem
    } else {
        DocItemLabel::Text
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

fn table_rows(table: &Table) -> Vec<String> {
    let mut rows = Vec::new();
    for row_child in &table.rows {
        let TableChild::TableRow(row) = row_child;
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell_child| {
                let TableRowChild::TableCell(cell) = cell_child;
                cell.children
                    .iter()
                    .filter_map(|content| match content {
                        TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        if cells.iter().any(|c| !c.trim().is_empty()) {
            rows.push(cells.join(" | "));
        }
    }
    rows
}
