use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::application::ports::IngestionError;
use crate::domain::DocItemLabel;

use super::document_reader::{DocumentReader, TextSpan};

const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Reads slide XML out of a `.pptx` archive, one span per `<a:p>` paragraph.
#[derive(Debug, Default)]
pub struct PresentationReader;

impl DocumentReader for PresentationReader {
    fn read(&self, path: &Path) -> Result<Vec<TextSpan>, IngestionError> {
        let file = File::open(path).map_err(|e| IngestionError::conversion_failed(path, e))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| {
            IngestionError::conversion_failed(path, format!("failed to open presentation: {e}"))
        })?;

        let mut slide_names: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with(SLIDE_PREFIX) && name.ends_with(".xml"))
            .map(str::to_string)
            .collect();
        slide_names.sort_by_key(|name| slide_number(name));

        let mut spans = Vec::new();
        let mut errors = Vec::new();

        for slide_name in slide_names {
            let mut xml = String::new();
            let read = archive
                .by_name(&slide_name)
                .map_err(|e| e.to_string())
                .and_then(|mut entry| entry.read_to_string(&mut xml).map_err(|e| e.to_string()));

            match read.and_then(|_| slide_paragraphs(&xml)) {
                Ok(paragraphs) => spans.extend(paragraphs),
                Err(e) => errors.push(format!("{slide_name}: {e}")),
            }
        }

        if !errors.is_empty() {
            return Err(IngestionError::ConversionFailed {
                path: path.to_path_buf(),
                errors,
            });
        }

        Ok(spans)
    }
}

fn slide_number(name: &str) -> u32 {
    name.trim_start_matches(SLIDE_PREFIX)
        .trim_end_matches(".xml")
        .parse()
        .unwrap_or(u32::MAX)
}

fn is_title_placeholder(element: &BytesStart<'_>) -> bool {
    element.local_name().as_ref() == b"ph"
        && element.attributes().flatten().any(|attr| {
            attr.key.local_name().as_ref() == b"type"
                && matches!(attr.value.as_ref(), b"title" | b"ctrTitle")
        })
}

fn slide_paragraphs(xml: &str) -> Result<Vec<TextSpan>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut spans = Vec::new();
    let mut in_title_shape = false;
    let mut in_text_run = false;
    let mut paragraph = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = true,
                b"p" => paragraph.clear(),
                _ => in_title_shape |= is_title_placeholder(&e),
            },
            Ok(Event::Empty(e)) => in_title_shape |= is_title_placeholder(&e),
            Ok(Event::Text(e)) if in_text_run => {
                let text = e.unescape().map_err(|err| err.to_string())?;
                paragraph.push_str(&text);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" if !paragraph.trim().is_empty() => {
                    let label = if in_title_shape {
                        DocItemLabel::Title
                    } else {
                        DocItemLabel::Text
                    };
                    spans.push(TextSpan::new(label, std::mem::take(&mut paragraph)));
                }
                b"sp" => in_title_shape = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
    }

    Ok(spans)
}
