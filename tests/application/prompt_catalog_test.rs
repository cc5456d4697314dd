use textops::application::services::{JOB_DESCRIPTION_PROMPT_ID, PromptCatalog};

#[test]
fn given_default_catalog_when_looking_up_job_description_then_found() {
    let catalog = PromptCatalog::default();

    let prompt = catalog.get(JOB_DESCRIPTION_PROMPT_ID).unwrap();

    assert_eq!(prompt.id, "job-description");
    assert_eq!(prompt.response_schema["type"], "object");
}

#[test]
fn given_job_description_prompt_when_rendering_then_input_embedded() {
    let catalog = PromptCatalog::default();
    let prompt = catalog.get(JOB_DESCRIPTION_PROMPT_ID).unwrap();

    let rendered = prompt.render("Senior Rust engineer at Acme");

    assert!(rendered.ends_with("Senior Rust engineer at Acme"));
    assert!(!rendered.contains("{job_description}"));
}

#[test]
fn given_default_catalog_when_listing_ids_then_sorted() {
    assert_eq!(PromptCatalog::default().ids(), vec!["job-description"]);
}

#[test]
fn given_unknown_id_when_looking_up_then_none() {
    assert!(PromptCatalog::default().get("cover-letter").is_none());
}
