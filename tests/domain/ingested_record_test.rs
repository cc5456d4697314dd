use serde_json::{Map, Value, json};

use textops::domain::{DocItemLabel, IngestedRecord};

#[test]
fn given_document_record_when_serialized_then_label_and_text_fields() {
    let record = IngestedRecord::document(DocItemLabel::SectionHeader, "Introduction");

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "label": "section_header", "text": "Introduction" })
    );
}

#[test]
fn given_row_record_when_serialized_then_bare_mapping() {
    let mut fields = Map::new();
    fields.insert("name".to_string(), json!("Ada"));
    fields.insert("age".to_string(), json!(36));
    let record = IngestedRecord::Row(fields);

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "name": "Ada", "age": 36 })
    );
}

#[test]
fn given_row_record_when_reading_text_then_none() {
    let record = IngestedRecord::Row(Map::<String, Value>::new());

    assert_eq!(record.text(), None);
    assert_eq!(record.label(), None);
}

#[test]
fn given_document_record_when_reading_accessors_then_values_returned() {
    let record = IngestedRecord::document(DocItemLabel::ListItem, "first point");

    assert_eq!(record.text(), Some("first point"));
    assert_eq!(record.label(), Some(DocItemLabel::ListItem));
}
