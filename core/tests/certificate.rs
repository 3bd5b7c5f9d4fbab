use gemdesk_core::certificate::{CertificateData, ImageLoadState, IMAGE_LOAD_ERROR_TEXT};
use gemdesk_core::product::{ProductDraft, TextField};

fn data_with(field: TextField, value: &str) -> CertificateData {
    let mut draft = ProductDraft::default();
    draft.set_text(field, value.to_string());
    CertificateData::from_draft(&draft)
}

#[test]
fn ratti_weight_gets_unit_suffix() {
    let data = data_with(TextField::WeightRatti, "5");
    let rows = data.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label_en, "WEIGHT");
    assert_eq!(rows[0].value, "5 RATTI");
}

#[test]
fn blank_fields_produce_no_rows() {
    let data = data_with(TextField::Colour, "Pigeon Blood");
    let rows = data.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label_en, "COLOUR");
    assert!(rows.iter().all(|row| !row.value.trim().is_empty()));
}

#[test]
fn rows_keep_template_order() {
    let mut draft = ProductDraft::default();
    draft.set_text(TextField::Dimensions, "10x8x5".to_string());
    draft.set_text(TextField::Shape, "Oval".to_string());
    draft.set_text(TextField::WeightCarat, "4.5".to_string());
    let rows = CertificateData::from_draft(&draft).rows();
    let labels: Vec<&str> = rows.iter().map(|row| row.label_en).collect();
    assert_eq!(labels, vec!["CARAT WEIGHT", "SHAPE", "DIMENSIONS"]);
    assert_eq!(rows[2].value, "10x8x5 MM");
}

#[test]
fn from_draft_trims_whitespace() {
    let data = data_with(TextField::Name, " Ruby ");
    assert_eq!(data.name, "Ruby");
}

#[test]
fn image_state_follows_url_changes() {
    let state = ImageLoadState::default();
    assert_eq!(state, ImageLoadState::NoImage);

    let state = state.url_changed("https://cdn.example/a.jpg");
    assert_eq!(state, ImageLoadState::Loaded);

    let state = state.load_failed();
    assert_eq!(state, ImageLoadState::Error);

    // only a URL change can leave the error state
    let state = state.load_failed();
    assert_eq!(state, ImageLoadState::Error);

    let state = state.url_changed("  ");
    assert_eq!(state, ImageLoadState::NoImage);

    // a failure report with no image shown is ignored
    assert_eq!(state.load_failed(), ImageLoadState::NoImage);
}

#[test]
fn error_text_is_stable() {
    assert_eq!(IMAGE_LOAD_ERROR_TEXT, "Image failed to load");
}

#[test]
fn empty_data_reports_empty() {
    assert!(CertificateData::default().is_empty());
    assert!(!data_with(TextField::Origin, "Burma").is_empty());
}
